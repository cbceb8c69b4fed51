use contracts::domain::common::ApiEnvelope;
use contracts::domain::gudang::{Gudang, GudangDraft};
use contracts::system::users::KepalaGudang;
use gloo_net::http::Request;

use crate::shared::api::{api_url, bearer};

/// Fetch the warehouse listing
pub async fn fetch_all(token: &str) -> Result<Vec<Gudang>, String> {
    let response = Request::get(&api_url("/api/gudang/viewall"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch gudang: {}", response.status()));
    }

    let envelope = response
        .json::<ApiEnvelope<Vec<Gudang>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(envelope.into_data())
}

/// Fetch user accounts with the warehouse-supervisor role
pub async fn fetch_kepala_gudang(token: &str) -> Result<Vec<KepalaGudang>, String> {
    let response = Request::get(&api_url("/api/user/all?role=kepala_gudang"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch kepala gudang: {}",
            response.status()
        ));
    }

    let envelope = response
        .json::<ApiEnvelope<Vec<KepalaGudang>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(envelope.into_data())
}

/// Create a new warehouse from the draft. Success is HTTP 201; on failure
/// the backend-provided message is surfaced when the body carries one.
pub async fn create(token: &str, draft: &GudangDraft) -> Result<(), String> {
    let response = Request::post(&api_url("/api/gudang/add"))
        .header("Authorization", &bearer(token))
        .json(draft)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 201 {
        return Ok(());
    }

    let backend_message = response
        .json::<ApiEnvelope<serde_json::Value>>()
        .await
        .ok()
        .and_then(|envelope| envelope.message);

    Err(match backend_message {
        Some(message) => format!("Gagal menambahkan gudang: {}", message),
        None => "Gagal menambahkan gudang. Silakan coba lagi.".to_string(),
    })
}
