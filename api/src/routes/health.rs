use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

/// Builds the `/health` route group, a single probe endpoint for uptime
/// checks and deploy gates.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Pings the database so a wedged connection pool surfaces here instead of
/// as failing writes.
///
/// ### Responses
/// - `200 OK` — `{"success": true, "data": "OK", "message": "Service is healthy"}`
/// - `500 Internal Server Error` — the database did not answer.
async fn health_check(State(state): State<AppState>) -> Response {
    match state.db().ping().await {
        Ok(()) => Json(ApiResponse::success("OK", "Service is healthy")).into_response(),
        Err(err) => {
            tracing::error!("database ping failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Database unreachable")),
            )
                .into_response()
        }
    }
}
