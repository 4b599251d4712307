use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::RequireAuth,
    pages::{dashboard::OverviewPage, dashboard::ReportsPage, home::HomePage, login::LoginPage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/dashboard/overview", "/dashboard/reports"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard/overview", "/dashboard/reports"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard/overview" view=ProtectedOverview/>
                    <Route path="/dashboard/reports" view=ProtectedReports/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedOverview() -> impl IntoView {
    view! { <RequireAuth><OverviewPage/></RequireAuth> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <RequireAuth><ReportsPage/></RequireAuth> }
}
