//! Quote API route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::warn;

use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::{HealthResponse, QuoteErrorResponse, QuoteResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/quote", post(create_quote))
        .route("/health", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Quote one reservation.
///
/// Re-fetches the price sheet on every call, so a stale browser tab can
/// never quote a stale price.
async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Response {
    let snapshot = match state.feed.load().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("price sheet unavailable while quoting: {e}");
            return quote_error(StatusCode::BAD_GATEWAY, "feed_unavailable", &e.to_string());
        }
    };

    let Some(vehicle) = snapshot
        .vehicles
        .iter()
        .find(|v| v.name == request.vehicle)
    else {
        return quote_error(
            StatusCode::NOT_FOUND,
            "vehicle_not_found",
            &format!("veículo '{}' não consta na planilha atual", request.vehicle),
        );
    };

    let reservation = request.to_reservation();
    let outcome = state.engine.build_quote(vehicle, &reservation);

    Json(QuoteResponse::from_outcome(
        vehicle,
        outcome,
        snapshot.warnings,
    ))
    .into_response()
}

fn quote_error(status: StatusCode, error_type: &str, message: &str) -> Response {
    (
        status,
        Json(QuoteErrorResponse {
            error_type: error_type.to_string(),
            message: message.to_string(),
        }),
    )
        .into_response()
}
