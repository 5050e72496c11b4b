//! HTTP route entry point.
//!
//! Route groups:
//! - `/health` → liveness probe (public)
//! - `/student` → student record CRUD (DELETE is admin-only)

use axum::Router;

use crate::routes::health::health_routes;
use crate::routes::students::student_routes;
use crate::state::AppState;

pub mod health;
pub mod students;

/// Builds the complete application router with `AppState` attached.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/student", student_routes())
        .with_state(app_state)
}
