use serde::{Deserialize, Serialize};

/// Response envelope used by every backend endpoint: `{ "data": ..., "message": ... }`.
///
/// Both fields are optional on the wire: list endpoints omit `message`,
/// error responses omit `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Take the payload, falling back to a default when the backend sent none.
    pub fn into_data(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_message() {
        let env: ApiEnvelope<Vec<i32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(env.into_data(), vec![1, 2]);
    }

    #[test]
    fn envelope_error_shape() {
        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"data":null,"message":"Gudang sudah ada"}"#).unwrap();
        assert_eq!(env.message.as_deref(), Some("Gudang sudah ada"));
        assert!(env.into_data().is_empty());
    }
}
