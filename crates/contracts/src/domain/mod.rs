pub mod barang;
pub mod common;
pub mod gudang;
pub mod penerimaan;
