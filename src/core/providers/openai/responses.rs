//! OpenAI Responses API
//!
//! JSON-mode text completions used by the shopping-list planner

use serde::{Deserialize, Serialize};

use super::error::OpenAIError;

/// Request body for `POST /responses`
#[derive(Debug, Clone, Serialize)]
pub struct OpenAIResponsesRequest {
    pub model: String,
    pub input: String,
    pub text: TextOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextOptions {
    pub format: TextFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl OpenAIResponsesRequest {
    /// Request constrained to a single JSON object
    pub fn json_object(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
            text: TextOptions {
                format: TextFormat {
                    format_type: "json_object".to_string(),
                },
            },
        }
    }
}

/// Response body of `POST /responses`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenAIResponsesResponse {
    #[serde(default)]
    pub output: Vec<OutputItem>,

    /// Convenience aggregate some SDK-compatible servers include
    #[serde(default)]
    pub output_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputItem {
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub content: Vec<OutputContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputContent {
    #[serde(rename = "type", default)]
    pub content_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl OpenAIResponsesResponse {
    /// Concatenated `output_text` segments of every message item
    pub fn text(&self) -> Result<String, OpenAIError> {
        let text: String = self
            .output
            .iter()
            .flat_map(|item| item.content.iter())
            .filter(|content| content.content_type == "output_text")
            .filter_map(|content| content.text.as_deref())
            .collect();

        if !text.is_empty() {
            return Ok(text);
        }

        match self.output_text.as_deref() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(OpenAIError::openai_response_parsing(
                "Response contained no output text",
            )),
        }
    }
}
