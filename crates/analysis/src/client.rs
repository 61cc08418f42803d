use std::time::Duration;

use protocol::config::{join_base_path, ServiceConfig};
use protocol::{AnalysisRequest, AnalyzeOutcome};
use reqwest::Client;
use uuid::Uuid;

pub const MAX_INPUT_CHARS: usize = 5000;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter the news text";
pub const TOO_LONG_MESSAGE: &str = "Text is too long (maximum 5000 characters)";
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Connection error. Please verify that the backend is running.";

/// Client-side admission check, applied before any call is issued.
pub fn validate_input(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err(EMPTY_INPUT_MESSAGE.to_string());
    }
    if text.chars().count() > MAX_INPUT_CHARS {
        return Err(TOO_LONG_MESSAGE.to_string());
    }
    Ok(())
}

/// Client for the remote analysis service. One operation: submit text, get
/// back the service's tagged outcome. No retry, no cancellation; the caller
/// keeps at most one request in flight.
pub struct AnalysisClient {
    http: Client,
    endpoint: String,
    timeout: Duration,
}

impl AnalysisClient {
    pub fn new(service: &ServiceConfig) -> Result<Self, String> {
        let endpoint = join_base_path(&service.base_url, service.analyze_path())?;
        let http = Client::builder()
            .build()
            .map_err(|err| format!("failed to build http client: {err}"))?;
        Ok(Self {
            http,
            endpoint,
            timeout: Duration::from_millis(service.timeout_ms()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits the text for analysis. Validation failures and transport
    /// failures come back as user-facing messages; everything the service
    /// itself answers, including tagged failures, comes back as the outcome.
    pub async fn analyze(&self, text: &str) -> Result<AnalyzeOutcome, String> {
        validate_input(text)?;
        let request = AnalysisRequest {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
        };
        tracing::info!(
            id = %request.id,
            chars = request.text.chars().count(),
            "submitting analysis request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(id = %request.id, error = %err, "analysis request failed");
                CONNECTION_ERROR_MESSAGE.to_string()
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            tracing::warn!(id = %request.id, error = %err, "failed to read analysis response");
            CONNECTION_ERROR_MESSAGE.to_string()
        })?;
        if !status.is_success() {
            tracing::warn!(id = %request.id, status = %status, "analysis service returned error status");
            return Err(CONNECTION_ERROR_MESSAGE.to_string());
        }

        let outcome = serde_json::from_str::<AnalyzeOutcome>(&body).map_err(|err| {
            tracing::warn!(id = %request.id, error = %err, "unrecognized analysis response body");
            CONNECTION_ERROR_MESSAGE.to_string()
        })?;
        tracing::info!(id = %request.id, "analysis response received");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base_url: &str) -> ServiceConfig {
        ServiceConfig {
            base_url: base_url.to_string(),
            analyze_path: None,
            timeout_ms: Some(1000),
        }
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(validate_input(""), Err(EMPTY_INPUT_MESSAGE.to_string()));
        assert_eq!(validate_input("   "), Err(EMPTY_INPUT_MESSAGE.to_string()));
    }

    #[test]
    fn oversized_input_is_rejected_before_any_call() {
        let text = "a".repeat(MAX_INPUT_CHARS + 1);
        assert_eq!(validate_input(&text), Err(TOO_LONG_MESSAGE.to_string()));
    }

    #[test]
    fn input_at_the_limit_is_accepted() {
        let text = "a".repeat(MAX_INPUT_CHARS);
        assert_eq!(validate_input(&text), Ok(()));
    }

    #[test]
    fn client_joins_base_url_and_default_path() {
        let client = AnalysisClient::new(&service("http://127.0.0.1:4943/")).expect("client");
        assert_eq!(client.endpoint(), "http://127.0.0.1:4943/analyze");
    }

    #[test]
    fn client_rejects_empty_base_url() {
        assert!(AnalysisClient::new(&service("")).is_err());
    }
}
