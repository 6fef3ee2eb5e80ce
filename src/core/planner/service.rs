//! Shopping-list planner

use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

use super::parse::parse_shopping_list;
use super::prompt::build_plan_prompt;
use super::types::{PlanRequest, ShoppingList};
use crate::config::models::provider::ProviderConfig;
use crate::config::models::redesign::PlannerConfig;
use crate::core::traits::TextProvider;
use crate::core::types::JsonCompletionRequest;
use crate::utils::error::{GatewayError, Result};

/// Turns a design description into a priced shopping list
#[derive(Debug, Clone)]
pub struct PlannerService {
    provider: Arc<dyn TextProvider>,
    config: PlannerConfig,
    timeout: Duration,
    timeout_seconds: u64,
}

impl PlannerService {
    pub fn new(
        provider: Arc<dyn TextProvider>,
        provider_config: &ProviderConfig,
        config: &PlannerConfig,
    ) -> Self {
        Self {
            provider,
            config: config.clone(),
            timeout: provider_config.timeout(),
            timeout_seconds: provider_config.timeout_seconds,
        }
    }

    pub async fn plan(&self, request: PlanRequest) -> Result<ShoppingList> {
        if request.prompt.trim().is_empty() {
            return Err(GatewayError::missing_prompt("A design description is required"));
        }

        let input = build_plan_prompt(&request.prompt, request.budget.as_deref(), &self.config);
        let completion = timeout(
            self.timeout,
            self.provider.complete_json(JsonCompletionRequest { input }),
        )
        .await
        .map_err(|_| {
            warn!("Planner completion timed out");
            GatewayError::provider_timeout(self.provider.name(), self.timeout_seconds)
        })??;

        let list = parse_shopping_list(&completion).inspect_err(|e| {
            warn!(error = %e, "Planner completion could not be parsed");
        })?;

        info!(
            items = list.items.len(),
            total_cost = list.total_cost,
            "Shopping list planned"
        );
        Ok(list)
    }
}
