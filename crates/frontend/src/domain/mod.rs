pub mod barang;
pub mod gudang;
pub mod penerimaan;
