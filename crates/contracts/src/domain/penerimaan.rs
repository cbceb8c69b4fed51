use serde::{Deserialize, Serialize};

/// Revenue entry shown in the penerimaan table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Penerimaan {
    pub id: i64,
    #[serde(rename = "jenisPenerimaan")]
    pub jenis_penerimaan: String,
    pub jumlah: i64,
    #[serde(rename = "sumberPenerimaan")]
    pub sumber_penerimaan: String,
}
