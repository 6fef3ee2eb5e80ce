//! E2E tests against OpenAI
//!
//! Run with: OPENAI_API_KEY=xxx cargo test -- --ignored openai

#[cfg(test)]
mod tests {
    use crate::skip_without_env;
    use redesign_gateway::config::PlannerConfig;
    use redesign_gateway::core::planner::{PlanRequest, PlannerService};
    use redesign_gateway::core::types::ImageGenerationRequest;
    use redesign_gateway::{Config, ImageProvider, OpenAIProvider};
    use std::sync::Arc;

    fn live_config() -> Config {
        let mut config = Config::default();
        config.gateway.provider.api_key = std::env::var("OPENAI_API_KEY").ok();
        config.gateway.provider.timeout_seconds = 180;
        config
    }

    #[tokio::test]
    #[ignore]
    async fn test_openai_generate_image() {
        skip_without_env!("OPENAI_API_KEY");

        let config = live_config();
        let provider = OpenAIProvider::new(&config.gateway.provider)
            .expect("Failed to create OpenAI provider");

        let response = provider
            .generate_image(ImageGenerationRequest {
                prompt: "A small minimalist living room, soft daylight".to_string(),
                size: "1024x1024".to_string(),
            })
            .await;

        assert!(response.is_ok(), "Image generation failed: {:?}", response.err());
        let response = response.unwrap();
        assert!(!response.data.is_empty(), "Expected at least one image");
        let first = &response.data[0];
        assert!(first.b64_json.is_some() || first.url.is_some());
    }

    #[tokio::test]
    #[ignore]
    async fn test_openai_shopping_list() {
        skip_without_env!("OPENAI_API_KEY");

        let config = live_config();
        let provider = Arc::new(
            OpenAIProvider::new(&config.gateway.provider).expect("Failed to create OpenAI provider"),
        );
        let planner =
            PlannerService::new(provider, &config.gateway.provider, &PlannerConfig::default());

        let list = planner
            .plan(PlanRequest {
                prompt: "Светлая кухня в скандинавском стиле".to_string(),
                budget: Some("200000".to_string()),
            })
            .await;

        assert!(list.is_ok(), "Planner failed: {:?}", list.err());
        let list = list.unwrap();
        assert!(!list.items.is_empty(), "Expected at least one item");
        assert!(list.total_cost > 0.0);
    }
}
