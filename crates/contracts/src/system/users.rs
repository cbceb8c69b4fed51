use serde::{Deserialize, Serialize};

/// Warehouse supervisor entry from the role-filtered users endpoint.
/// Only what the selector needs; the full account lives on the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KepalaGudang {
    pub id: String,
    pub name: String,
}
