//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::unified_provider::ProviderError;
use actix_multipart::MultipartError;

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        GatewayError::Provider(err)
    }
}

// Every multipart protocol failure, including a stream that ends before the
// closing boundary, is reported as a malformed upload.
impl From<MultipartError> for GatewayError {
    fn from(err: MultipartError) -> Self {
        GatewayError::MalformedUpload(err.to_string())
    }
}

impl From<actix_web::error::PayloadError> for GatewayError {
    fn from(err: actix_web::error::PayloadError) -> Self {
        match err {
            actix_web::error::PayloadError::Overflow => {
                GatewayError::PayloadTooLarge(err.to_string())
            }
            other => GatewayError::MalformedUpload(other.to_string()),
        }
    }
}
