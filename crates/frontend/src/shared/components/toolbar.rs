use leptos::prelude::*;

/// Filter categories of the revenue table: key plus dropdown label.
pub const FILTER_CATEGORIES: &[(&str, &str)] = &[
    ("all", "Filter: All Fields"),
    ("id", "Filter: ID"),
    ("penerimaan", "Filter: Jenis Penerimaan"),
    ("jumlah", "Filter: Jumlah"),
    ("sumber", "Filter: Sumber Penerimaan"),
];

pub fn search_placeholder(category: &str) -> String {
    format!("Search by {}", category)
}

/// Toolbar above the revenue table: add, refresh, category filter, search.
///
/// The parent owns the authoritative search string and filter category; the
/// toolbar only echoes them. The echo is re-synchronised whenever the parent
/// value changes from outside (e.g. a refresh clearing the search), and every
/// keystroke is forwarded upward immediately, without debouncing.
#[component]
pub fn RevenueToolbar(
    #[prop(into)] selected_category: Signal<String>,
    #[prop(into)] search_term: Signal<String>,
    on_add: Callback<()>,
    on_refresh: Callback<()>,
    on_filter: Callback<String>,
    on_search: Callback<String>,
) -> impl IntoView {
    let input_value = RwSignal::new(search_term.get_untracked());

    Effect::new(move || {
        input_value.set(search_term.get());
    });

    let handle_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        input_value.set(value.clone());
        on_search.run(value);
    };

    view! {
        <div class="toolbar">
            <div class="toolbar-item">
                <button class="toolbar-btn toolbar-btn--add" on:click=move |_| on_add.run(())>
                    "+"
                </button>
                <p class="toolbar-text">"Add"</p>
            </div>

            <div class="toolbar-item">
                <button class="toolbar-btn toolbar-btn--refresh" on:click=move |_| on_refresh.run(())>
                    "⟳"
                </button>
                <p class="toolbar-text">"Refresh"</p>
            </div>

            <div class="toolbar-item toolbar-item--filter">
                <select
                    class="filter-dropdown"
                    on:change=move |ev| on_filter.run(event_target_value(&ev))
                >
                    {FILTER_CATEGORIES
                        .iter()
                        .map(|(key, label)| {
                            let key = *key;
                            let is_selected = move || selected_category.get() == key;
                            view! {
                                <option value=key selected=is_selected>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="search-container">
                <input
                    type="text"
                    class="search-bar"
                    placeholder=move || search_placeholder(&selected_category.get())
                    prop:value=move || input_value.get()
                    on:input=handle_search
                />
                <span class="search-icon">"🔍"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_follows_active_category() {
        assert_eq!(search_placeholder("all"), "Search by all");
        assert_eq!(search_placeholder("jumlah"), "Search by jumlah");
    }

    #[test]
    fn category_keys_are_unique() {
        let mut keys: Vec<&str> = FILTER_CATEGORIES.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), FILTER_CATEGORIES.len());
    }
}
