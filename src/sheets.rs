use axum::body::Bytes;
use reqwest::{Client, Url, header::CONTENT_TYPE};
use serde_json::Value;

use crate::error::RelayError;

/// Outbound side of the relay: one write-only spreadsheet endpoint.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: Client,
    endpoint: Option<Url>,
}

impl SheetsClient {
    pub fn new(endpoint: Option<Url>) -> Self {
        SheetsClient {
            http: Client::new(),
            endpoint,
        }
    }

    /// Posts `payload` as-is and returns the service's JSON reply.
    ///
    /// The payload is posted once; redirects from the service are followed to
    /// fetch its reply. Any transport error, non-success status or non-JSON
    /// reply is an error and nothing is retried.
    pub async fn append(&self, payload: Bytes) -> Result<Value, RelayError> {
        let endpoint = self.endpoint.as_ref().ok_or(RelayError::NotConfigured)?;

        let response = self
            .http
            .post(endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(RelayError::UpstreamBody)
    }
}
