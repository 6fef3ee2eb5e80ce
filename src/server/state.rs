//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::Config;
use crate::core::planner::PlannerService;
use crate::core::redesign::RedesignPipeline;
use crate::core::traits::{ImageProvider, TextProvider};
use crate::core::upload::UploadIngestor;
use crate::utils::error::Result;

/// HTTP server state shared across handlers
///
/// Everything here is immutable after startup; requests share nothing else.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Multipart decoder and staging area
    pub ingestor: Arc<UploadIngestor>,
    /// Image redesign pipeline
    pub redesign: Arc<RedesignPipeline>,
    /// Shopping-list planner
    pub planner: Arc<PlannerService>,
}

impl AppState {
    /// Wire the pipelines to the given providers
    pub async fn new(
        config: Config,
        image_provider: Arc<dyn ImageProvider>,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self> {
        let ingestor = UploadIngestor::new(config.upload()).await?;
        let redesign = RedesignPipeline::new(
            image_provider,
            config.provider(),
            &config.gateway.redesign,
        );
        let planner = PlannerService::new(
            text_provider,
            config.provider(),
            &config.gateway.planner,
        );

        Ok(Self {
            config: Arc::new(config),
            ingestor: Arc::new(ingestor),
            redesign: Arc::new(redesign),
            planner: Arc::new(planner),
        })
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
