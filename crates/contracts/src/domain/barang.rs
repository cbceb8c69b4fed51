use serde::{Deserialize, Serialize};

/// Item record as returned by the goods endpoints. Read-only on the
/// frontend; rendered verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barang {
    pub id: i64,
    pub nama: String,
    pub kategori: String,
    pub merk: String,
    #[serde(rename = "totalStock")]
    pub total_stock: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names() {
        let json = r#"{"id":7,"nama":"Semen","kategori":"Material","merk":"Tiga Roda","totalStock":120}"#;
        let barang: Barang = serde_json::from_str(json).unwrap();
        assert_eq!(barang.total_stock, 120);
        let back = serde_json::to_string(&barang).unwrap();
        assert!(back.contains("\"totalStock\":120"));
    }
}
