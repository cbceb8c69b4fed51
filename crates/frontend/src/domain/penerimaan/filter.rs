use contracts::domain::penerimaan::Penerimaan;

/// Case-insensitive substring match of a revenue row against the toolbar's
/// category and search text. Category `all` matches when any field does; an
/// empty query matches everything.
pub fn matches_filter(row: &Penerimaan, category: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    let contains = |value: &str| value.to_lowercase().contains(&query);

    match category {
        "id" => contains(&row.id.to_string()),
        "penerimaan" => contains(&row.jenis_penerimaan),
        "jumlah" => contains(&row.jumlah.to_string()),
        "sumber" => contains(&row.sumber_penerimaan),
        _ => {
            contains(&row.id.to_string())
                || contains(&row.jenis_penerimaan)
                || contains(&row.jumlah.to_string())
                || contains(&row.sumber_penerimaan)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Penerimaan {
        Penerimaan {
            id: 42,
            jenis_penerimaan: "Penjualan".to_string(),
            jumlah: 1_500_000,
            sumber_penerimaan: "Toko Online".to_string(),
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_filter(&row(), "all", ""));
        assert!(matches_filter(&row(), "id", "  "));
    }

    #[test]
    fn category_restricts_the_searched_field() {
        assert!(matches_filter(&row(), "penerimaan", "penjualan"));
        assert!(!matches_filter(&row(), "penerimaan", "toko"));
        assert!(matches_filter(&row(), "sumber", "toko"));
        assert!(matches_filter(&row(), "jumlah", "1500"));
        assert!(matches_filter(&row(), "id", "42"));
    }

    #[test]
    fn all_category_searches_every_field() {
        assert!(matches_filter(&row(), "all", "42"));
        assert!(matches_filter(&row(), "all", "online"));
        assert!(!matches_filter(&row(), "all", "gudang"));
    }
}
