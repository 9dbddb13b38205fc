use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Employees,
    Attendance,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Dashboard, NavItem::Employees, NavItem::Attendance];

    pub fn href(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "/dashboard",
            NavItem::Employees => "/employees",
            NavItem::Attendance => "/attendance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Employees => "Employees",
            NavItem::Attendance => "Attendance",
        }
    }
}

fn nav_link_class(item: NavItem, active: Option<NavItem>) -> &'static str {
    if active == Some(item) {
        "px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
    }
}

#[component]
pub fn Header(#[prop(default = None, into)] active: Option<NavItem>) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/dashboard" class="text-xl font-semibold text-fg">
                        "HRMS Lite"
                    </a>
                    <nav class="hidden md:flex space-x-2">
                        {NavItem::ALL
                            .into_iter()
                            .map(|item| view! {
                                <a
                                    href=item.href()
                                    class=nav_link_class(item, active)
                                    aria-current=(active == Some(item)).then_some("page")
                                >
                                    {item.label()}
                                </a>
                            })
                            .collect_view()}
                    </nav>
                    <button
                        type="button"
                        class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                        </svg>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="md:hidden border-t border-border px-4 py-3 space-y-2">
                        {NavItem::ALL
                            .into_iter()
                            .map(|item| view! {
                                <a
                                    href=item.href()
                                    class=format!("block {}", nav_link_class(item, active))
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {item.label()}
                                </a>
                            })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(default = None, into)] active: Option<NavItem>, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header active=active/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status" aria-label="Loading">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
