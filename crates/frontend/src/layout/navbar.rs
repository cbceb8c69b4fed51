use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::routes::routes::{BARANG_LIST_ROUTE, GUDANG_LIST_ROUTE, LOGIN_ROUTE, PENERIMAAN_ROUTE};
use crate::system::session::context::{end_session, use_session};

/// Page shell navbar: section links plus logout. Logout clears the session
/// (token and role) and returns to the entry screen.
#[component]
pub fn Navbar(#[prop(into)] title: String) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        end_session(session);
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <h2 class="navbar__title">{title}</h2>
            <div class="navbar__links">
                <A href=BARANG_LIST_ROUTE>"Barang"</A>
                <A href=GUDANG_LIST_ROUTE>"Gudang"</A>
                <A href=PENERIMAAN_ROUTE>"Penerimaan"</A>
            </div>
            <button class="navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
