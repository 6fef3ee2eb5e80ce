//! Provider response normalization

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::ImageResponse;
use crate::utils::error::{GatewayError, Result};

/// What one provider call produced
#[derive(Debug, Clone)]
pub enum ProviderOutcome {
    InlineImage { base64: String },
    RemoteImage { url: String },
    Empty,
    ProviderError(ProviderError),
    TimedOut { provider: &'static str, seconds: u64 },
}

impl ProviderOutcome {
    /// First entry wins; its inline payload is preferred over its URL
    pub fn from_response(response: ImageResponse) -> Self {
        let Some(entry) = response.data.into_iter().next() else {
            return Self::Empty;
        };

        if let Some(base64) = entry.b64_json.filter(|b64| !b64.trim().is_empty()) {
            return Self::InlineImage { base64 };
        }
        if let Some(url) = entry.url.filter(|url| !url.trim().is_empty()) {
            return Self::RemoteImage { url };
        }
        Self::Empty
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::InlineImage { .. } => "inline_image",
            Self::RemoteImage { .. } => "remote_image",
            Self::Empty => "empty",
            Self::ProviderError(_) => "provider_error",
            Self::TimedOut { .. } => "timed_out",
        }
    }

    /// Collapse into the single `image` string the client receives
    pub fn into_image(self, output_mime: &str) -> Result<String> {
        match self {
            Self::InlineImage { base64 } => {
                let payload: String = base64.split_whitespace().collect();
                STANDARD.decode(&payload).map_err(|e| {
                    GatewayError::invalid_provider_output(format!("Image payload is not base64: {}", e))
                })?;
                Ok(format!("data:{};base64,{}", output_mime, payload))
            }
            Self::RemoteImage { url } => {
                url::Url::parse(&url).map_err(|e| {
                    GatewayError::invalid_provider_output(format!("Image URL is invalid: {}", e))
                })?;
                Ok(url)
            }
            Self::Empty => Err(GatewayError::empty_provider_response(
                "Response contained no b64_json or url",
            )),
            Self::ProviderError(err) => Err(GatewayError::Provider(err)),
            Self::TimedOut { provider, seconds } => {
                Err(GatewayError::provider_timeout(provider, seconds))
            }
        }
    }
}
