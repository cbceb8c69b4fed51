use contracts::domain::barang::Barang;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::domain::barang::api;
use crate::layout::navbar::Navbar;
use crate::system::session::context::use_session;
use crate::system::session::guard::RequireSession;

/// Copy shown while there is no record to render: the stored error when
/// loading failed, otherwise the loading notice.
fn placeholder_text(load_error: Option<String>) -> String {
    load_error.unwrap_or_else(|| "Memuat data barang...".to_string())
}

#[component]
pub fn BarangDetailsPage() -> impl IntoView {
    view! {
        <RequireSession>
            <BarangDetails />
        </RequireSession>
    }
}

#[component]
fn BarangDetails() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let barang: RwSignal<Option<Barang>> = RwSignal::new(None);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    Effect::new(move || {
        let Some(id) = params.read().get("id").and_then(|raw| raw.parse::<i64>().ok()) else {
            set_load_error.set(Some("Identifier tidak valid".to_string()));
            return;
        };
        let Some(token) = session.get_untracked().token else {
            return;
        };
        spawn_local(async move {
            match api::fetch_by_id(&token, id).await {
                Ok(data) => barang.set(Some(data)),
                Err(e) => {
                    log::error!("Error fetching barang {}: {}", id, e);
                    set_load_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="page-container">
            <Navbar title="Detail Barang" />
            <div class="goods-container">
                {move || match barang.get() {
                    Some(item) => view! {
                        <div class="detail-card">
                            <h3 class="detail-card__title">{item.nama.clone()}</h3>
                            <dl class="detail-card__fields">
                                <dt>"ID"</dt>
                                <dd>{item.id}</dd>
                                <dt>"Kategori"</dt>
                                <dd>{item.kategori.clone()}</dd>
                                <dt>"Merk"</dt>
                                <dd>{item.merk.clone()}</dd>
                                <dt>"Total Stok"</dt>
                                <dd>{item.total_stock}</dd>
                            </dl>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="no-data-container">
                            <h3 class="no-data-text">
                                {move || placeholder_text(load_error.get())}
                            </h3>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::placeholder_text;

    #[test]
    fn placeholder_shows_the_stored_error() {
        assert_eq!(
            placeholder_text(Some("Identifier tidak valid".to_string())),
            "Identifier tidak valid"
        );
    }

    #[test]
    fn placeholder_defaults_to_loading_copy() {
        assert_eq!(placeholder_text(None), "Memuat data barang...");
    }
}
