//! Record store client backed by the server's `/api/penguins` endpoints.

use async_trait::async_trait;
use common::catalog::{PenguinStore, StoreError};
use common::model::penguin::{Penguin, PenguinFields, PenguinPatch};
use common::responses::ApiResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

pub const DEFAULT_API_BASE: &str = "/api/penguins";

/// Talks to the penguin API over `fetch`.
///
/// Transport failures, undecodable bodies and `success = false` envelopes all
/// come back as a [`StoreError`].
#[derive(Debug, Clone)]
pub struct HttpPenguinStore {
    base_url: String,
}

impl HttpPenguinStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl Default for HttpPenguinStore {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

fn transport(err: gloo_net::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

/// Maps a finished exchange to the store's result.
///
/// A `404` on a record URL (`missing_id` set) is `NotFound`; otherwise the body
/// must be an envelope, and `success = false` or an empty payload is `Rejected`.
fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
    missing_id: Option<&str>,
) -> Result<T, StoreError> {
    if let (404, Some(id)) = (status, missing_id) {
        return Err(StoreError::NotFound(id.to_string()));
    }
    let envelope: ApiResponse<T> = serde_json::from_str(body)
        .map_err(|e| StoreError::Decode(format!("HTTP {}: {}", status, e)))?;
    envelope.into_result().map_err(StoreError::Rejected)
}

async fn read_envelope<T: DeserializeOwned>(
    response: Response,
    missing_id: Option<&str>,
) -> Result<T, StoreError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    decode_envelope(status, &body, missing_id)
}

#[async_trait(?Send)]
impl PenguinStore for HttpPenguinStore {
    async fn list(&self) -> Result<Vec<Penguin>, StoreError> {
        let response = Request::get(&self.base_url)
            .send()
            .await
            .map_err(transport)?;
        read_envelope(response, None).await
    }

    async fn create(&self, fields: PenguinFields) -> Result<Penguin, StoreError> {
        let response = Request::post(&self.base_url)
            .json(&fields)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_envelope(response, None).await
    }

    async fn update(&self, id: &str, patch: PenguinPatch) -> Result<Penguin, StoreError> {
        let response = Request::put(&self.record_url(id))
            .json(&patch)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_envelope(response, Some(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KING: &str = r#"{"id":"k1","species":"King Penguin","habitat":"Subantarctic islands",
        "height":"85-95 cm","diet":"Fish and squid","funFact":"14-16 months","isFavorite":true}"#;

    #[test]
    fn test_successful_envelope_yields_data() {
        let body = format!(r#"{{"success":true,"data":{}}}"#, KING);
        let penguin: Penguin = decode_envelope(200, &body, Some("k1")).unwrap();
        assert_eq!(penguin.id, "k1");
        assert!(penguin.is_favorite);

        let empty: Vec<Penguin> =
            decode_envelope(200, r#"{"success":true,"data":[]}"#, None).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_not_found_on_record_url() {
        let body = r#"{"success":false,"error":"no penguin with id k9"}"#;
        let err = decode_envelope::<Penguin>(404, body, Some("k9")).unwrap_err();
        assert_eq!(err, StoreError::NotFound("k9".to_string()));
    }

    #[test]
    fn test_unsuccessful_envelope_is_rejected() {
        let body = r#"{"success":false,"error":"missing field `habitat`"}"#;
        let err = decode_envelope::<Penguin>(400, body, None).unwrap_err();
        assert_eq!(err, StoreError::Rejected("missing field `habitat`".to_string()));

        let err = decode_envelope::<Penguin>(200, r#"{"success":true}"#, None).unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
    }

    #[test]
    fn test_non_envelope_body_is_a_decode_error() {
        let err =
            decode_envelope::<Vec<Penguin>>(502, "<html>Bad Gateway</html>", None).unwrap_err();
        assert!(matches!(err, StoreError::Decode(msg) if msg.starts_with("HTTP 502")));
    }
}
