//! Helper functions for creating specific error types

use super::types::GatewayError;

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn malformed_upload<S: Into<String>>(message: S) -> Self {
        Self::MalformedUpload(message.into())
    }

    pub fn payload_too_large<S: Into<String>>(message: S) -> Self {
        Self::PayloadTooLarge(message.into())
    }

    pub fn missing_prompt<S: Into<String>>(message: S) -> Self {
        Self::MissingPrompt(message.into())
    }

    pub fn missing_image<S: Into<String>>(message: S) -> Self {
        Self::MissingImage(message.into())
    }

    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn provider_timeout(provider: &'static str, seconds: u64) -> Self {
        Self::ProviderTimeout { provider, seconds }
    }

    pub fn empty_provider_response<S: Into<String>>(message: S) -> Self {
        Self::EmptyProviderResponse(message.into())
    }

    pub fn invalid_provider_output<S: Into<String>>(message: S) -> Self {
        Self::InvalidProviderOutput(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error was raised before any provider call
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedUpload(_)
                | Self::PayloadTooLarge(_)
                | Self::MissingPrompt(_)
                | Self::MissingImage(_)
                | Self::InvalidRequest(_)
        )
    }
}
