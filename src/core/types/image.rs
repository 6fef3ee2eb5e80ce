//! Image request and response types shared by every image provider

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// One image handed to the provider, with its original metadata
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub bytes: Bytes,
    pub filename: String,
    pub mime_type: String,
}

/// Edit an existing image according to an instruction
#[derive(Debug, Clone)]
pub struct ImageEditRequest {
    /// Base image first, auxiliary references after it
    pub images: Vec<ImageInput>,
    pub prompt: String,
    /// Target canvas, e.g. `1024x1024`
    pub size: String,
}

/// Generate a new image from text alone
#[derive(Debug, Clone)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub size: String,
}

/// Image response (OpenAI-compatible format)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageResponse {
    /// Creation timestamp
    #[serde(default)]
    pub created: i64,

    /// Image data list
    #[serde(default)]
    pub data: Vec<ImageData>,
}

/// Image data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageData {
    /// Image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Base64 encoded image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,

    /// Revised prompt (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

impl ImageResponse {
    /// Response carrying a single inline payload
    pub fn inline(b64_json: impl Into<String>) -> Self {
        Self {
            created: 0,
            data: vec![ImageData {
                b64_json: Some(b64_json.into()),
                ..Default::default()
            }],
        }
    }

    /// Response carrying a single remote reference
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            created: 0,
            data: vec![ImageData {
                url: Some(url.into()),
                ..Default::default()
            }],
        }
    }
}
