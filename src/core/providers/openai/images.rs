//! OpenAI Images Module
//!
//! Request construction for `/images/edits` and `/images/generations`

use reqwest::multipart;
use serde::Serialize;

use super::error::OpenAIError;
use crate::core::types::{ImageEditRequest, ImageGenerationRequest, ImageInput};

/// OpenAI Image Generation request
#[derive(Debug, Clone, Serialize)]
pub struct OpenAIImageGenerationRequest {
    /// A text description of the desired image
    pub prompt: String,

    /// The model to use for image generation
    pub model: String,

    /// The number of images to generate
    pub n: u32,

    /// The size of the generated images
    pub size: String,

    /// Only accepted by DALL-E models; GPT image models always answer inline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,
}

/// Image model helpers
pub struct OpenAIImageUtils;

impl OpenAIImageUtils {
    /// GPT image models accept several input images per edit
    pub fn supports_multiple_inputs(model: &str) -> bool {
        model.starts_with("gpt-image")
    }

    /// DALL-E models default to URLs unless asked for base64
    pub fn response_format(model: &str) -> Option<String> {
        if model.starts_with("dall-e") {
            Some("b64_json".to_string())
        } else {
            None
        }
    }

    /// Build the JSON body for a generation call
    pub fn generation_request(
        model: &str,
        request: ImageGenerationRequest,
    ) -> OpenAIImageGenerationRequest {
        OpenAIImageGenerationRequest {
            prompt: request.prompt,
            model: model.to_string(),
            n: 1,
            size: request.size,
            response_format: Self::response_format(model),
        }
    }

    /// Build the multipart form for an edit call
    pub fn edit_form(
        model: &str,
        request: ImageEditRequest,
    ) -> Result<multipart::Form, OpenAIError> {
        if request.images.is_empty() {
            return Err(OpenAIError::openai_bad_request(
                "Image edit requires at least one image",
            ));
        }

        let mut form = multipart::Form::new()
            .text("model", model.to_string())
            .text("prompt", request.prompt)
            .text("size", request.size)
            .text("n", "1");

        if let Some(format) = Self::response_format(model) {
            form = form.text("response_format", format);
        }

        let field_name = if request.images.len() > 1 {
            "image[]"
        } else {
            "image"
        };

        for image in request.images {
            form = form.part(field_name, Self::image_part(image)?);
        }

        Ok(form)
    }

    fn image_part(image: ImageInput) -> Result<multipart::Part, OpenAIError> {
        multipart::Part::bytes(image.bytes.to_vec())
            .file_name(image.filename)
            .mime_str(&image.mime_type)
            .map_err(|e| OpenAIError::openai_bad_request(format!("Invalid MIME type: {}", e)))
    }
}
