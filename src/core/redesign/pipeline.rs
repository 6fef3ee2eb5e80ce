//! Redesign request pipeline
//!
//! Mode selection, prompt construction, the time-bounded provider call and
//! response normalization for one decoded upload.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::outcome::ProviderOutcome;
use super::phase::{OperationMode, RequestPhase};
use super::prompt::build_instruction;
use super::types::RedesignOutput;
use crate::config::models::provider::ProviderConfig;
use crate::config::models::redesign::RedesignConfig;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ImageProvider;
use crate::core::types::{ImageEditRequest, ImageGenerationRequest, ImageResponse};
use crate::core::upload::UploadRequest;
use crate::utils::error::{GatewayError, Result};

/// Prepared provider call
#[derive(Debug)]
enum ProviderCall {
    Edit(ImageEditRequest),
    Generate(ImageGenerationRequest),
}

/// Turns an [`UploadRequest`] into a [`RedesignOutput`]
#[derive(Debug, Clone)]
pub struct RedesignPipeline {
    provider: Arc<dyn ImageProvider>,
    config: RedesignConfig,
    image_size: String,
    output_mime: String,
    timeout: Duration,
    timeout_seconds: u64,
}

impl RedesignPipeline {
    pub fn new(
        provider: Arc<dyn ImageProvider>,
        provider_config: &ProviderConfig,
        config: &RedesignConfig,
    ) -> Self {
        Self {
            provider,
            config: config.clone(),
            image_size: provider_config.image_size.clone(),
            output_mime: provider_config.output_mime.clone(),
            timeout: provider_config.timeout(),
            timeout_seconds: provider_config.timeout_seconds,
        }
    }

    pub async fn run(&self, request: &UploadRequest) -> Result<RedesignOutput> {
        if self.config.require_image && !request.has_attachments() {
            return Err(GatewayError::missing_image("An image upload is required"));
        }

        let mode = OperationMode::select(request.has_attachments());
        RequestPhase::ModeSelected(mode).enter();

        let prompt = build_instruction(
            &request.prompt,
            request.style.as_deref(),
            request.wishes.as_deref(),
            mode,
            &self.config.fallback_instruction,
        )?;

        let call = self.prepare(mode, request, prompt).await?;

        RequestPhase::AwaitingProvider.enter();
        let started = Instant::now();
        let outcome = match timeout(self.timeout, self.invoke(call)).await {
            Ok(Ok(response)) => ProviderOutcome::from_response(response),
            Ok(Err(err)) => ProviderOutcome::ProviderError(err),
            Err(_) => ProviderOutcome::TimedOut {
                provider: self.provider.name(),
                seconds: self.timeout_seconds,
            },
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            ProviderOutcome::InlineImage { .. } | ProviderOutcome::RemoteImage { .. } => {
                RequestPhase::Succeeded.enter();
                info!(mode = %mode, outcome = outcome.kind(), elapsed_ms, "Provider call succeeded");
            }
            ProviderOutcome::TimedOut { .. } => {
                RequestPhase::TimedOut.enter();
                warn!(mode = %mode, elapsed_ms, "Provider call timed out");
            }
            ProviderOutcome::Empty => {
                RequestPhase::ProviderFailed.enter();
                warn!(mode = %mode, elapsed_ms, "Provider returned no image");
            }
            ProviderOutcome::ProviderError(err) => {
                RequestPhase::ProviderFailed.enter();
                warn!(mode = %mode, elapsed_ms, error = %err, "Provider call failed");
            }
        }

        let image = outcome.into_image(&self.output_mime)?;
        Ok(RedesignOutput::success(image))
    }

    /// Load attachment bytes before the provider race starts
    async fn prepare(
        &self,
        mode: OperationMode,
        request: &UploadRequest,
        prompt: String,
    ) -> Result<ProviderCall> {
        match mode {
            OperationMode::Generate => Ok(ProviderCall::Generate(ImageGenerationRequest {
                prompt,
                size: self.image_size.clone(),
            })),
            OperationMode::Edit => {
                let forwarded = if self.provider.supports_multiple_inputs() {
                    request.attachments.len()
                } else {
                    1
                };
                if request.attachments.len() > forwarded {
                    debug!(
                        ignored = request.attachments.len() - forwarded,
                        "Provider takes a single image; ignoring extra attachments"
                    );
                }

                let mut images = Vec::with_capacity(forwarded);
                for attachment in request.attachments.iter().take(forwarded) {
                    images.push(attachment.to_image_input().await?);
                }

                Ok(ProviderCall::Edit(ImageEditRequest {
                    images,
                    prompt,
                    size: self.image_size.clone(),
                }))
            }
        }
    }

    async fn invoke(&self, call: ProviderCall) -> std::result::Result<ImageResponse, ProviderError> {
        match call {
            ProviderCall::Edit(request) => self.provider.edit_image(request).await,
            ProviderCall::Generate(request) => self.provider.generate_image(request).await,
        }
    }
}
