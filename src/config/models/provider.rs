//! Provider configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Image and text provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Bearer credential (falls back to `OPENAI_API_KEY`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Organization header value
    #[serde(default)]
    pub organization: Option<String>,
    /// Model used for image edits and generations
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Model used for the shopping-list planner
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Output canvas size
    #[serde(default = "default_image_size")]
    pub image_size: String,
    /// MIME type of inline image payloads
    #[serde(default = "default_output_mime")]
    pub output_mime: String,
    /// Hard bound on a single provider call, in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            organization: None,
            image_model: default_image_model(),
            text_model: default_text_model(),
            image_size: default_image_size(),
            output_mime: default_output_mime(),
            timeout_seconds: default_provider_timeout(),
        }
    }
}

impl ProviderConfig {
    /// Provider call timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Credential, if one is configured and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_image_model() -> String {
    "gpt-image-1".to_string()
}

fn default_text_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_image_size() -> String {
    "1024x1024".to_string()
}

fn default_output_mime() -> String {
    "image/png".to_string()
}
