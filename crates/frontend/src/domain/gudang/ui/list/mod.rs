use contracts::domain::gudang::Gudang;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::domain::gudang::api;
use crate::layout::navbar::Navbar;
use crate::routes::routes::GUDANG_ADD_ROUTE;
use crate::system::session::context::use_session;
use crate::system::session::guard::RequireSession;

#[component]
pub fn GudangListPage() -> impl IntoView {
    view! {
        <RequireSession>
            <GudangList />
        </RequireSession>
    }
}

#[component]
fn GudangList() -> impl IntoView {
    let session = use_session();
    let items: RwSignal<Vec<Gudang>> = RwSignal::new(Vec::new());
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let navigate = use_navigate();

    Effect::new(move || {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        spawn_local(async move {
            match api::fetch_all(&token).await {
                Ok(data) => items.set(data),
                Err(e) => {
                    log::error!("Error fetching gudang list: {}", e);
                    set_load_error.set(Some(e));
                }
            }
        });
    });

    let go_to_add = move |_| navigate(GUDANG_ADD_ROUTE, NavigateOptions::default());

    view! {
        <div class="page-container">
            <Navbar title="Gudang" />
            <div class="page-header">
                <h1 class="page-title">"Daftar Gudang"</h1>
                <button class="btn btn-primary" on:click=go_to_add>
                    "Tambah Gudang"
                </button>
            </div>
            <div class="goods-container">
                <Show
                    when=move || !items.get().is_empty()
                    fallback=move || view! {
                        <div class="no-data-container">
                            <h3 class="no-data-text">
                                {move || if load_error.get().is_some() {
                                    "Data gudang tidak dapat dimuat."
                                } else {
                                    "Tidak ada data gudang tersedia."
                                }}
                            </h3>
                        </div>
                    }
                >
                    <div class="table-container">
                        <table>
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Nama Gudang"</th>
                                    <th>"Kapasitas"</th>
                                    <th>"Kepala Gudang"</th>
                                    <th>"Kota"</th>
                                    <th>"Provinsi"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || items.get()
                                    key=|gudang| gudang.id
                                    children=move |gudang| {
                                        view! {
                                            <tr>
                                                <td>{gudang.id}</td>
                                                <td>{gudang.nama.clone()}</td>
                                                <td>{gudang.kapasitas}</td>
                                                <td>{gudang.kepala_gudang.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td>{gudang.alamat_gudang.kota.clone()}</td>
                                                <td>{gudang.alamat_gudang.provinsi.clone()}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}
