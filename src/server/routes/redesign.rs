//! Image redesign endpoint

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use crate::core::redesign::RequestPhase;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;

/// `POST /api/redesign`
///
/// Accepts `multipart/form-data` with optional `prompt`, `style`, `wishes`
/// fields and zero or more `image` file parts.
pub async fn redesign(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, GatewayError> {
    let request_id = Uuid::new_v4();

    handle(&state, payload, request_id)
        .instrument(info_span!("redesign", %request_id))
        .await
}

async fn handle(
    state: &AppState,
    payload: Multipart,
    request_id: Uuid,
) -> Result<HttpResponse, GatewayError> {
    RequestPhase::Ingesting.enter();
    let upload = state
        .ingestor
        .ingest(payload, request_id)
        .await
        .inspect_err(|e| {
            RequestPhase::MalformedInput.enter();
            warn!(error = %e, "Upload rejected");
        })?;

    let result = state.redesign.run(&upload).await;
    // Staged files go before the response is written
    drop(upload);

    if matches!(&result, Err(e) if e.is_client_error()) {
        RequestPhase::MalformedInput.enter();
    }
    RequestPhase::Responded.enter();

    let output = result?;
    Ok(HttpResponse::Ok()
        .insert_header(("x-request-id", request_id.to_string()))
        .json(output))
}
