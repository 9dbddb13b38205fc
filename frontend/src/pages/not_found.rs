use leptos::*;
use leptos_meta::Title;

use crate::components::layout::Layout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not Found | HRMS Lite"/>
        <Layout>
            <NotFoundPanel/>
        </Layout>
    }
}

#[component]
pub fn NotFoundPanel() -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 text-center space-y-2">
            <h1 class="text-2xl font-bold text-fg">{"Page not found"}</h1>
            <p class="text-sm text-fg-muted">{"The page you are looking for does not exist."}</p>
            <a href="/dashboard" class="text-sm font-medium text-action-primary-bg hover:underline">
                {"Back to dashboard"}
            </a>
        </div>
    }
}
