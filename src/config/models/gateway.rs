//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Image/text provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Upload ingestion bounds
    #[serde(default)]
    pub upload: UploadConfig,
    /// Redesign pipeline settings
    #[serde(default)]
    pub redesign: RedesignConfig,
    /// Shopping-list planner settings
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Apply environment variable overrides on top of file values
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides looked up through `var`
    pub fn apply_overrides<F>(mut self, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        if let Some(host) = var("GATEWAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("GATEWAY_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid GATEWAY_PORT: {}", e)))?;
        }
        if let Some(workers) = var("GATEWAY_WORKERS") {
            self.server.workers = Some(workers.parse().map_err(|e| {
                GatewayError::Config(format!("Invalid GATEWAY_WORKERS: {}", e))
            })?);
        }

        // A key in the config file wins over the environment
        if self.provider.api_key().is_none() {
            if let Some(api_key) = var("OPENAI_API_KEY") {
                self.provider.api_key = Some(api_key);
            }
        }
        if let Some(api_base) = var("OPENAI_API_BASE") {
            self.provider.api_base = api_base;
        }
        if let Some(timeout) = var("PROVIDER_TIMEOUT_SECONDS") {
            self.provider.timeout_seconds = timeout.parse().map_err(|e| {
                GatewayError::Config(format!("Invalid PROVIDER_TIMEOUT_SECONDS: {}", e))
            })?;
        }
        if let Some(dir) = var("UPLOAD_STAGING_DIR") {
            self.upload.staging_dir = Some(dir.into());
        }

        Ok(self)
    }
}
