use contracts::domain::penerimaan::Penerimaan;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::penerimaan::{api, filter::matches_filter};
use crate::layout::navbar::Navbar;
use crate::shared::components::toolbar::RevenueToolbar;
use crate::shared::toast::use_toasts;
use crate::system::session::context::use_session;
use crate::system::session::guard::RequireSession;

#[component]
pub fn PenerimaanListPage() -> impl IntoView {
    view! {
        <RequireSession>
            <PenerimaanList />
        </RequireSession>
    }
}

#[component]
fn PenerimaanList() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let rows: RwSignal<Vec<Penerimaan>> = RwSignal::new(Vec::new());
    let (load_error, set_load_error) = signal(Option::<String>::None);

    // The page owns the authoritative filter state; the toolbar only echoes it.
    let selected_category = RwSignal::new("all".to_string());
    let search_term = RwSignal::new(String::new());

    let load = move || {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        spawn_local(async move {
            match api::fetch_all(&token).await {
                Ok(data) => {
                    set_load_error.set(None);
                    rows.set(data);
                }
                Err(e) => {
                    log::error!("Error fetching penerimaan list: {}", e);
                    set_load_error.set(Some(e));
                }
            }
        });
    };

    Effect::new(move || load());

    let filtered = Signal::derive(move || {
        let category = selected_category.get();
        let query = search_term.get();
        rows.get()
            .into_iter()
            .filter(|row| matches_filter(row, &category, &query))
            .collect::<Vec<_>>()
    });

    let on_add = Callback::new(move |_: ()| {
        toasts.error("Fitur tambah penerimaan belum tersedia");
    });
    // Refresh re-fetches and clears the search; the toolbar echo follows.
    let on_refresh = Callback::new(move |_: ()| {
        search_term.set(String::new());
        load();
    });
    let on_filter = Callback::new(move |category: String| {
        selected_category.set(category);
    });
    let on_search = Callback::new(move |text: String| {
        search_term.set(text);
    });

    view! {
        <div class="page-container">
            <Navbar title="Penerimaan" />
            <RevenueToolbar
                selected_category=selected_category
                search_term=search_term
                on_add=on_add
                on_refresh=on_refresh
                on_filter=on_filter
                on_search=on_search
            />
            <div class="goods-container">
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=move || view! {
                        <div class="no-data-container">
                            <h3 class="no-data-text">
                                {move || if load_error.get().is_some() {
                                    "Data penerimaan tidak dapat dimuat."
                                } else {
                                    "Tidak ada data penerimaan tersedia."
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
                                    <th>"Jenis Penerimaan"</th>
                                    <th>"Jumlah"</th>
                                    <th>"Sumber Penerimaan"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || filtered.get()
                                    key=|row| row.id
                                    children=move |row| {
                                        view! {
                                            <tr>
                                                <td>{row.id}</td>
                                                <td>{row.jenis_penerimaan.clone()}</td>
                                                <td>{row.jumlah}</td>
                                                <td>{row.sumber_penerimaan.clone()}</td>
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
