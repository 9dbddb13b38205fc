use leptos::*;

use crate::components::layout::{Layout, NavItem};

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! { <Layout active=NavItem::Dashboard>{children()}</Layout> }
}
