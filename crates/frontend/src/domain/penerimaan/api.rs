use contracts::domain::common::ApiEnvelope;
use contracts::domain::penerimaan::Penerimaan;
use gloo_net::http::Request;

use crate::shared::api::{api_url, bearer};

/// Fetch the revenue table rows
pub async fn fetch_all(token: &str) -> Result<Vec<Penerimaan>, String> {
    let response = Request::get(&api_url("/api/penerimaan/viewall"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch penerimaan: {}", response.status()));
    }

    let envelope = response
        .json::<ApiEnvelope<Vec<Penerimaan>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(envelope.into_data())
}
