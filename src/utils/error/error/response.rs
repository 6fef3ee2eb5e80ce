//! HTTP response handling for errors
//!
//! Every error leaves the gateway as the same JSON failure shape:
//! `{ "ok": false, "error": "...", "code": "...", "details": "..." }`.

use super::types::GatewayError;
use crate::core::providers::unified_provider::ProviderError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl GatewayError {
    /// Stable machine-readable code for the failure kind
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::MalformedUpload(_) => "MALFORMED_UPLOAD",
            GatewayError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            GatewayError::MissingPrompt(_) => "MISSING_PROMPT",
            GatewayError::MissingImage(_) => "MISSING_IMAGE",
            GatewayError::InvalidRequest(_) => "INVALID_REQUEST",
            GatewayError::ProviderTimeout { .. } => "PROVIDER_TIMEOUT",
            GatewayError::Provider(ProviderError::Timeout { .. }) => "PROVIDER_TIMEOUT",
            GatewayError::Provider(_) => "PROVIDER_ERROR",
            GatewayError::EmptyProviderResponse(_) => "EMPTY_PROVIDER_RESPONSE",
            GatewayError::InvalidProviderOutput(_) => "INVALID_PROVIDER_OUTPUT",
            _ => "INTERNAL_ERROR",
        }
    }

    /// Human-readable summary and optional diagnostic details
    fn public_message(&self) -> (String, Option<String>) {
        match self {
            GatewayError::Provider(provider_error) => {
                let details = match provider_error.status_code() {
                    Some(status) => format!(
                        "{} status {}: {}",
                        provider_error.provider(),
                        status,
                        provider_error.message()
                    ),
                    None => provider_error.to_string(),
                };
                ("Provider request failed".to_string(), Some(details))
            }
            GatewayError::ProviderTimeout { .. } => (
                "Provider request timed out".to_string(),
                Some(self.to_string()),
            ),
            GatewayError::EmptyProviderResponse(details) => (
                "Provider returned neither an image payload nor a URL".to_string(),
                Some(details.clone()),
            ),
            GatewayError::InvalidProviderOutput(details) => (
                "Provider returned an invalid response".to_string(),
                Some(details.clone()),
            ),
            GatewayError::MalformedUpload(details) => {
                ("Malformed upload".to_string(), Some(details.clone()))
            }
            GatewayError::PayloadTooLarge(details) => {
                ("Payload too large".to_string(), Some(details.clone()))
            }
            GatewayError::MissingPrompt(_) => ("Missing prompt".to_string(), None),
            GatewayError::MissingImage(_) => ("Missing image".to_string(), None),
            GatewayError::InvalidRequest(details) => {
                ("Invalid request".to_string(), Some(details.clone()))
            }
            GatewayError::Config(_) => ("Server is misconfigured".to_string(), None),
            _ => ("An internal error occurred".to_string(), None),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MalformedUpload(_)
            | GatewayError::MissingPrompt(_)
            | GatewayError::MissingImage(_)
            | GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::ProviderTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Provider(provider_error) => match provider_error {
                ProviderError::ApiError { status, .. } if *status >= 500 => {
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                }
                ProviderError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                ProviderError::Network { .. } | ProviderError::ResponseParsing { .. } => {
                    StatusCode::BAD_GATEWAY
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            GatewayError::EmptyProviderResponse(_) | GatewayError::InvalidProviderOutput(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error, details) = self.public_message();
        let error_response = ErrorResponse {
            ok: false,
            error,
            code: self.code().to_string(),
            details,
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Failure body shared by every endpoint
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Failure body for conditions that never become a `GatewayError`
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            code: code.into(),
            details: None,
        }
    }
}
