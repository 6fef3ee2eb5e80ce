//! OpenAI Provider Error Handling
//!
//! OpenAI uses the unified ProviderError with specific constructor methods for OpenAI-specific contexts

pub use crate::core::providers::unified_provider::ProviderError as OpenAIError;

use serde::Deserialize;

const PROVIDER: &str = "openai";

/// Error envelope returned by the OpenAI API
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// OpenAI-specific error constructors
impl OpenAIError {
    pub fn openai_configuration(message: impl Into<String>) -> Self {
        Self::configuration(PROVIDER, message)
    }

    pub fn openai_bad_request(message: impl Into<String>) -> Self {
        Self::invalid_request(PROVIDER, message)
    }

    pub fn openai_response_parsing(message: impl Into<String>) -> Self {
        Self::response_parsing(PROVIDER, message)
    }

    /// Map a transport-level reqwest failure
    pub fn openai_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(PROVIDER, err.to_string())
        } else if err.is_decode() {
            Self::response_parsing(PROVIDER, err.to_string())
        } else {
            Self::network(PROVIDER, err.to_string())
        }
    }

    /// Map a non-2xx status and its body, preferring the API's own message
    pub fn openai_status(status: u16, body: &str, retry_after: Option<u64>) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    body.trim().to_string()
                }
            });

        match status {
            429 => Self::rate_limit(PROVIDER, message, retry_after),
            _ => Self::from_status(PROVIDER, status, message),
        }
    }
}

/// Turn a non-success response into an error, consuming the body
pub(super) async fn error_from_response(response: reqwest::Response) -> OpenAIError {
    let status = response.status().as_u16();
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok());
    let body = response.text().await.unwrap_or_default();
    OpenAIError::openai_status(status, &body, retry_after)
}
