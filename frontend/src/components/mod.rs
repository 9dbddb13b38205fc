pub mod common;
pub mod confirm_dialog;
pub mod dialog;
pub mod empty_state;
pub mod layout;
pub mod status_badge;
pub mod toast;
