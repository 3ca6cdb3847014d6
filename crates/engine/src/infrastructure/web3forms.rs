//! Web3Forms contact relay client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::Serialize;

use crate::infrastructure::ports::{ContactRelay, ContactSubmission, RelayError};

/// Default submission endpoint.
pub const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";

/// Forwards contact submissions as JSON with the configured access key.
#[derive(Clone)]
pub struct Web3FormsRelay {
    client: Client,
    endpoint: String,
    access_key: Option<String>,
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    access_key: &'a str,
}

impl Web3FormsRelay {
    pub fn new(endpoint: &str, access_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.to_string(),
            access_key,
        }
    }
}

#[async_trait]
impl ContactRelay for Web3FormsRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        let access_key = self.access_key.as_deref().ok_or(RelayError::NotConfigured)?;

        let body = SubmitRequest {
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
            access_key,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), "Contact relay accepted submission");
        Ok(())
    }
}
