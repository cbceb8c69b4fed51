use leptos::prelude::*;
use leptos_router::components::Router;

use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::session::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Notification stack is app-wide; every page pushes into the same host.
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <Router>
                <ToastHost />
                <AppRoutes />
            </Router>
        </SessionProvider>
    }
}
