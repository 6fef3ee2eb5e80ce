//! OpenAI Provider Client Implementation
//!
//! One reqwest client, shared across requests, serving both image and text capabilities

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::models::provider::ProviderConfig;
use crate::core::traits::{ImageProvider, TextProvider};
use crate::core::types::{
    ImageEditRequest, ImageGenerationRequest, ImageResponse, JsonCompletionRequest,
};

use super::error::{OpenAIError, error_from_response};
use super::images::OpenAIImageUtils;
use super::responses::{OpenAIResponsesRequest, OpenAIResponsesResponse};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenAI Provider implementation
#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    client: reqwest::Client,
    api_base: String,
    image_model: String,
    text_model: String,
}

impl OpenAIProvider {
    /// Create new OpenAI provider
    pub fn new(config: &ProviderConfig) -> Result<Self, OpenAIError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| OpenAIError::openai_configuration("API key is required"))?;

        let client = reqwest::Client::builder()
            .default_headers(Self::default_headers(api_key, config.organization.as_deref())?)
            .timeout(config.timeout())
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| OpenAIError::openai_configuration(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            image_model: config.image_model.clone(),
            text_model: config.text_model.clone(),
        })
    }

    fn default_headers(api_key: &str, organization: Option<&str>) -> Result<HeaderMap, OpenAIError> {
        let mut headers = HeaderMap::with_capacity(2);

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| OpenAIError::openai_configuration("API key is not a valid header value"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        if let Some(org) = organization.filter(|org| !org.is_empty()) {
            let value = HeaderValue::from_str(org).map_err(|_| {
                OpenAIError::openai_configuration("Organization is not a valid header value")
            })?;
            headers.insert("OpenAI-Organization", value);
        }

        Ok(headers)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Send a prepared request and decode a successful body
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, OpenAIError> {
        let response = request.send().await.map_err(OpenAIError::openai_transport)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(OpenAIError::openai_transport)?;

        serde_json::from_slice(&bytes).map_err(|e| OpenAIError::openai_response_parsing(e.to_string()))
    }
}

#[async_trait]
impl ImageProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn supports_multiple_inputs(&self) -> bool {
        OpenAIImageUtils::supports_multiple_inputs(&self.image_model)
    }

    async fn edit_image(&self, request: ImageEditRequest) -> Result<ImageResponse, OpenAIError> {
        debug!(
            model = %self.image_model,
            images = request.images.len(),
            "Sending image edit request"
        );
        let form = OpenAIImageUtils::edit_form(&self.image_model, request)?;
        let request = self.client.post(self.url("/images/edits")).multipart(form);
        self.execute(request).await
    }

    async fn generate_image(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageResponse, OpenAIError> {
        debug!(model = %self.image_model, "Sending image generation request");
        let body = OpenAIImageUtils::generation_request(&self.image_model, request);
        let request = self.client.post(self.url("/images/generations")).json(&body);
        self.execute(request).await
    }
}

#[async_trait]
impl TextProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete_json(&self, request: JsonCompletionRequest) -> Result<String, OpenAIError> {
        debug!(model = %self.text_model, "Sending JSON completion request");
        let body = OpenAIResponsesRequest::json_object(&self.text_model, request.input);
        let request = self.client.post(self.url("/responses")).json(&body);
        let response: OpenAIResponsesResponse = self.execute(request).await?;
        response.text()
    }
}
