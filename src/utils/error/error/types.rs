//! Error types for the Gateway

use crate::core::providers::unified_provider::ProviderError;
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors (missing credential, invalid values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Multipart body could not be decoded
    #[error("Malformed upload: {0}")]
    MalformedUpload(String),

    /// Upload exceeded a byte or attachment bound
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Missing prompt: {0}")]
    MissingPrompt(String),

    #[error("Missing image: {0}")]
    MissingImage(String),

    /// Request body was readable but not acceptable
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Provider did not answer within the configured bound
    #[error("Provider {provider} did not respond within {seconds}s")]
    ProviderTimeout { provider: &'static str, seconds: u64 },

    /// Provider errors
    #[error("Provider error: {0}")]
    Provider(ProviderError),

    /// Provider answered without an inline payload or a reference
    #[error("Empty provider response: {0}")]
    EmptyProviderResponse(String),

    /// Provider answered with content that does not match the expected shape
    #[error("Invalid provider output: {0}")]
    InvalidProviderOutput(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
