//! Core configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use url::Url;

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server.validate()?;
        self.provider.validate()?;
        self.upload.validate()?;
        self.redesign.validate()?;
        self.planner.validate()?;

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() && self.allow_credentials {
            return Err(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            );
        }
        Ok(())
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.api_base)
            .map_err(|e| format!("Provider api_base has invalid URL format: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Provider api_base must use http:// or https://, got: {}",
                url.scheme()
            ));
        }

        if self.image_model.trim().is_empty() {
            return Err("Provider image_model cannot be empty".to_string());
        }

        if self.text_model.trim().is_empty() {
            return Err("Provider text_model cannot be empty".to_string());
        }

        let mut dims = self.image_size.split('x');
        let valid_size = matches!(
            (dims.next(), dims.next(), dims.next()),
            (Some(w), Some(h), None) if w.parse::<u32>().is_ok() && h.parse::<u32>().is_ok()
        );
        if !valid_size {
            return Err(format!(
                "Provider image_size must look like 1024x1024, got: {}",
                self.image_size
            ));
        }

        if !self.output_mime.starts_with("image/") {
            return Err(format!(
                "Provider output_mime must be an image type, got: {}",
                self.output_mime
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("Provider timeout_seconds must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for UploadConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_total_bytes == 0 {
            return Err("Upload max_total_bytes must be greater than 0".to_string());
        }

        if self.max_attachments == 0 {
            return Err("Upload max_attachments must be greater than 0".to_string());
        }

        if self.max_field_bytes == 0 {
            return Err("Upload max_field_bytes must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for RedesignConfig {
    fn validate(&self) -> Result<(), String> {
        if self.fallback_instruction.trim().is_empty() {
            return Err("Redesign fallback_instruction cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for PlannerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.currency.trim().is_empty() {
            return Err("Planner currency cannot be empty".to_string());
        }
        Ok(())
    }
}
