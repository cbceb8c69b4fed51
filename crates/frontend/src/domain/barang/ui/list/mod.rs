use contracts::domain::barang::Barang;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::domain::barang::api;
use crate::layout::navbar::Navbar;
use crate::routes::routes::barang_details_route;
use crate::system::session::context::use_session;
use crate::system::session::guard::RequireSession;

#[component]
pub fn BarangListPage() -> impl IntoView {
    view! {
        <RequireSession>
            <BarangList />
        </RequireSession>
    }
}

#[component]
fn BarangList() -> impl IntoView {
    let session = use_session();
    let items: RwSignal<Vec<Barang>> = RwSignal::new(Vec::new());
    // Fetch failure is kept as its own state so "backend unreachable" stays
    // distinguishable from "collection is genuinely empty".
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
                    log::error!("Error fetching barang list: {}", e);
                    set_load_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="page-container">
            <Navbar title="Goods & Services" />
            <div class="goods-container">
                <Show
                    when=move || !items.get().is_empty()
                    fallback=move || view! {
                        <div class="no-data-container">
                            <h3 class="no-data-text">
                                {move || if load_error.get().is_some() {
                                    "Data barang tidak dapat dimuat."
                                } else {
                                    "Tidak ada data barang tersedia."
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
                                    <th>"Nama Barang"</th>
                                    <th>"Kategori"</th>
                                    <th>"Merk"</th>
                                    <th>"Stok"</th>
                                    <th>"Action"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || items.get()
                                    key=|barang| barang.id
                                    children={
                                        let navigate = navigate.clone();
                                        move |barang| {
                                            let navigate = navigate.clone();
                                            let id = barang.id;
                                            view! {
                                                <tr>
                                                    <td>{barang.id}</td>
                                                    <td>{barang.nama.clone()}</td>
                                                    <td>{barang.kategori.clone()}</td>
                                                    <td>{barang.merk.clone()}</td>
                                                    <td>{barang.total_stock}</td>
                                                    <td>
                                                        <button
                                                            class="detail-btn"
                                                            on:click=move |_| navigate(
                                                                &barang_details_route(id),
                                                                NavigateOptions::default(),
                                                            )
                                                        >
                                                            "Details"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
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
