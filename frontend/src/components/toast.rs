use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::state::toast::{use_toaster, Toast, ToastLevel};

const AUTO_DISMISS_MS: u32 = 4_000;

fn toast_classes(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        ToastLevel::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
    }
}

#[component]
pub fn ToastRegion() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed top-4 right-4 z-[80] flex w-80 flex-col gap-2" aria-live="polite">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toaster = use_toaster();
    let id = toast.id;

    create_effect(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toaster.dismiss(id);
        });
    });

    let role = match toast.notification.level {
        ToastLevel::Success => "status",
        ToastLevel::Error => "alert",
    };

    view! {
        <div
            class=format!(
                "flex items-start justify-between gap-3 rounded border px-4 py-3 shadow {}",
                toast_classes(toast.notification.level),
            )
            role=role
        >
            <p class="text-sm">{toast.notification.message}</p>
            <button
                type="button"
                aria-label="Dismiss"
                class="text-sm opacity-70 hover:opacity-100"
                on:click=move |_| toaster.dismiss(id)
            >
                {"✕"}
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::{provide_toaster, Notification};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_queued_toasts_by_level() {
        let html = render_to_string(|| {
            let toaster = provide_toaster();
            toaster.push(Notification::success("Employee added successfully"));
            toaster.push(Notification::error("Failed to load data"));
            view! { <ToastRegion/> }
        });
        assert!(html.contains("Employee added successfully"));
        assert!(html.contains("Failed to load data"));
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("role=\"status\""));
    }
}
