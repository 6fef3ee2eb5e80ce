//! HTTP server core implementation

use actix_cors::Cors;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{Method, StatusCode};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{Condition, DefaultHeaders},
    web,
};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::core::providers::OpenAIProvider;
use crate::core::traits::{ImageProvider, TextProvider};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a server backed by the OpenAI client
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let provider = Arc::new(
            OpenAIProvider::new(config.provider())
                .map_err(|e| GatewayError::config(e.to_string()))?,
        );
        let image_provider: Arc<dyn ImageProvider> = provider.clone();
        let text_provider: Arc<dyn TextProvider> = provider;

        Self::with_providers(config, image_provider, text_provider).await
    }

    /// Create a server with explicit providers
    pub async fn with_providers(
        config: &Config,
        image_provider: Arc<dyn ImageProvider>,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self> {
        let state = AppState::new(config.clone(), image_provider, text_provider).await?;
        Ok(Self {
            config: config.gateway.server.clone(),
            state,
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!(workers, "Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| GatewayError::server(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Build the CORS middleware from configuration
fn cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();

    if config.allows_all_origins() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors = cors.max_age(config.max_age as usize);

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

/// Preflights answered by the CORS layer come back as `200`; report `204`
fn no_content_preflight<B>(is_options: bool, mut res: ServiceResponse<B>) -> ServiceResponse<B> {
    if is_options && res.status() == StatusCode::OK {
        *res.response_mut().status_mut() = StatusCode::NO_CONTENT;
    }
    res
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors_config = &state.config.server().cors;
    let cors = Condition::new(cors_config.enabled, cors(cors_config));

    App::new()
        .app_data(state)
        .wrap(cors)
        .wrap_fn(|req, srv| {
            let is_options = req.method() == Method::OPTIONS;
            let response = srv.call(req);
            async move { response.await.map(|res| no_content_preflight(is_options, res)) }
        })
        .wrap(TracingLogger::default())
        .wrap(DefaultHeaders::new().add(("Server", "redesign-gateway")))
        .configure(routes::configure_routes)
}
