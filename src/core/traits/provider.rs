//! Provider capability traits
//!
//! The pipelines only see these traits; the concrete client is built once at
//! startup and injected, so tests can substitute stubs.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::{
    ImageEditRequest, ImageGenerationRequest, ImageResponse, JsonCompletionRequest,
};

/// Image editing and generation
#[async_trait]
pub trait ImageProvider: Send + Sync + Debug + 'static {
    fn name(&self) -> &'static str;

    /// Whether edits accept auxiliary reference images after the base image
    fn supports_multiple_inputs(&self) -> bool {
        false
    }

    async fn edit_image(&self, request: ImageEditRequest) -> Result<ImageResponse, ProviderError>;

    async fn generate_image(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageResponse, ProviderError>;
}

/// Text completion constrained to a JSON object
#[async_trait]
pub trait TextProvider: Send + Sync + Debug + 'static {
    fn name(&self) -> &'static str;

    /// Returns the raw completion text, which the caller parses
    async fn complete_json(&self, request: JsonCompletionRequest) -> Result<String, ProviderError>;
}
