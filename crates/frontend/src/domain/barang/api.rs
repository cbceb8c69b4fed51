use contracts::domain::barang::Barang;
use contracts::domain::common::ApiEnvelope;
use gloo_net::http::Request;

use crate::shared::api::{api_url, bearer};

/// Fetch the full item collection
pub async fn fetch_all(token: &str) -> Result<Vec<Barang>, String> {
    let response = Request::get(&api_url("/api/barang/viewall"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch barang: {}", response.status()));
    }

    let envelope = response
        .json::<ApiEnvelope<Vec<Barang>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(envelope.into_data())
}

/// Fetch a single item by id
pub async fn fetch_by_id(token: &str, id: i64) -> Result<Barang, String> {
    let response = Request::get(&api_url(&format!("/api/barang/{}", id)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch barang {}: {}", id, response.status()));
    }

    let envelope = response
        .json::<ApiEnvelope<Barang>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    envelope.data.ok_or_else(|| "Barang tidak ditemukan".to_string())
}
