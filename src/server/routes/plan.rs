//! Shopping-list endpoint

use actix_web::{HttpResponse, web};
use bytes::BytesMut;
use futures::StreamExt;
use tracing::{Instrument, info_span};
use uuid::Uuid;

use crate::core::planner::PlanRequest;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;

/// `POST /api/plan`
///
/// The body is read by hand so that size and syntax errors keep the JSON
/// failure shape.
pub async fn plan(
    state: web::Data<AppState>,
    payload: web::Payload,
) -> Result<HttpResponse, GatewayError> {
    let request_id = Uuid::new_v4();

    handle(&state, payload)
        .instrument(info_span!("plan", %request_id))
        .await
}

async fn handle(state: &AppState, mut payload: web::Payload) -> Result<HttpResponse, GatewayError> {
    let limit = state.config.server().max_body_size;

    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        if body.len() + chunk.len() > limit {
            return Err(GatewayError::payload_too_large(format!(
                "Body exceeds {} bytes",
                limit
            )));
        }
        body.extend_from_slice(&chunk);
    }

    let request = PlanRequest::from_body(&body)?;
    let list = state.planner.plan(request).await?;
    Ok(HttpResponse::Ok().json(list))
}
