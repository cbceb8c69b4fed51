use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::domain::barang::ui::details::BarangDetailsPage;
use crate::domain::barang::ui::list::BarangListPage;
use crate::domain::gudang::ui::form::AddGudangPage;
use crate::domain::gudang::ui::list::GudangListPage;
use crate::domain::penerimaan::ui::list::PenerimaanListPage;
use crate::system::pages::login::LoginPage;

/// Route targets used by navigation side effects (post-create redirect,
/// logout, expired-session redirect).
pub const LOGIN_ROUTE: &str = "/";
pub const BARANG_LIST_ROUTE: &str = "/good-and-services";
pub const GUDANG_LIST_ROUTE: &str = "/gudang";
pub const GUDANG_ADD_ROUTE: &str = "/gudang/add";
pub const PENERIMAAN_ROUTE: &str = "/penerimaan";

pub fn barang_details_route(id: i64) -> String {
    format!("{}/{}", BARANG_LIST_ROUTE, id)
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <div class="not-found">"Halaman tidak ditemukan."</div> }>
            <Route path=StaticSegment("") view=LoginPage />
            <Route path=StaticSegment("good-and-services") view=BarangListPage />
            <Route
                path=(StaticSegment("good-and-services"), ParamSegment("id"))
                view=BarangDetailsPage
            />
            <Route path=StaticSegment("gudang") view=GudangListPage />
            <Route path=(StaticSegment("gudang"), StaticSegment("add")) view=AddGudangPage />
            <Route path=StaticSegment("penerimaan") view=PenerimaanListPage />
        </Routes>
    }
}
