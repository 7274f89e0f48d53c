use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::constants::{RELAY_PATH, RESULT_SUCCESS};
use crate::models::{MovementRecord, SubmissionReply};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("rejected: {0}")]
    Rejected(String),
}

/// Form-side caller of the relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        RelayClient {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Sends one record and returns the storage reply when it reports success.
    ///
    /// The reply is judged by its `result` flag alone, so an error status
    /// with a JSON body still yields the relay's error message.
    pub async fn submit(&self, record: &MovementRecord) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, RELAY_PATH))
            .json(record)
            .send()
            .await?;

        let body = response.bytes().await?;
        let reply: Value = serde_json::from_slice(&body)?;
        let summary: SubmissionReply = serde_json::from_value(reply.clone())?;

        if summary.result.as_deref() == Some(RESULT_SUCCESS) {
            Ok(reply)
        } else {
            Err(ClientError::Rejected(
                summary.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}
