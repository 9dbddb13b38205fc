use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::toast::ToastRegion,
    pages::{AttendancePage, DashboardPage, EmployeesPage, NotFoundPage},
    state::toast::provide_toaster,
};

pub const DEFAULT_ROUTE: &str = "/dashboard";

pub const ROUTE_PATHS: &[&str] = &["/", "/dashboard", "/employees", "/attendance"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_toaster();
    view! {
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path=DEFAULT_ROUTE/> }/>
                <Route path="/dashboard" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
        <ToastRegion/>
    }
}
