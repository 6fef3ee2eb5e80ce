//! HTTP routes
//!
//! Each endpoint answers `OPTIONS` itself and rejects other unsupported
//! methods with the JSON failure shape.

pub mod health;
pub mod plan;
pub mod redesign;

use actix_web::http::{Method, StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

use crate::server::state::AppState;
use crate::utils::error::ErrorResponse;

const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Configure all routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/api/redesign")
                .route(web::post().to(redesign::redesign))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/api/plan")
                .route(web::post().to(plan::plan))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed)),
        );
}

/// Answer an `OPTIONS` request that no CORS layer handled
async fn preflight(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let cors = &state.config.server().cors;
    let mut response = HttpResponse::NoContent();

    response.insert_header((
        header::ACCESS_CONTROL_ALLOW_METHODS,
        cors.allowed_methods.join(", "),
    ));
    response.insert_header((
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        cors.allowed_headers.join(", "),
    ));
    response.insert_header((header::ACCESS_CONTROL_MAX_AGE, cors.max_age.to_string()));
    if cors.enabled {
        let origin = req
            .headers()
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok());
        if let Some(allowed) = cors.allow_origin_for(origin) {
            response.insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, allowed));
        }
        response.insert_header((header::VARY, "Origin"));
    }

    response.finish()
}

async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = %req.path(), "Method not allowed");
    HttpResponse::build(StatusCode::METHOD_NOT_ALLOWED)
        .insert_header((header::ALLOW, ALLOWED_METHODS))
        .json(ErrorResponse::new("Method not allowed", "METHOD_NOT_ALLOWED"))
}
