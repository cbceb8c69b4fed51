use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::context::use_session;
use crate::routes::routes::LOGIN_ROUTE;

/// Wrapper for pages that need a stored session token.
///
/// Without a token the children are never rendered (so no fetch fires) and
/// the user is sent to the entry screen.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || session.get().is_authenticated() fallback=|| ()>
            {children()}
        </Show>
    }
}
