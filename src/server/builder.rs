//! Server builder and run_server function

use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::core::traits::{ImageProvider, TextProvider};
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    image_provider: Option<Arc<dyn ImageProvider>>,
    text_provider: Option<Arc<dyn TextProvider>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use this image provider instead of the configured client
    pub fn with_image_provider(mut self, provider: Arc<dyn ImageProvider>) -> Self {
        self.image_provider = Some(provider);
        self
    }

    /// Use this text provider instead of the configured client
    pub fn with_text_provider(mut self, provider: Arc<dyn TextProvider>) -> Self {
        self.text_provider = Some(provider);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        match (self.image_provider, self.text_provider) {
            (Some(image), Some(text)) => HttpServer::with_providers(&config, image, text).await,
            (None, None) => HttpServer::new(&config).await,
            _ => Err(GatewayError::Config(
                "Image and text providers must be overridden together".to_string(),
            )),
        }
    }
}

/// Run the server with a loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    config.require_credential()?;

    let server = ServerBuilder::new().with_config(config).build().await?;
    let server_config = server.config();
    info!(
        "Server starting at: http://{}:{}",
        server_config.host, server_config.port
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/redesign - Redesign a room photo");
    info!("   POST /api/plan - Shopping list for a design");

    server.start().await
}
