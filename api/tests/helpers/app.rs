use api::routes::routes;
use api::state::AppState;
use axum::response::Response;
use axum::Router;
use common::config::Config;
use ctor::ctor;
use db::test_utils::setup_test_db;
use serde_json::Value;
use std::env;

#[ctor]
fn setup_test_env() {
    // ctor runs before the harness spawns its worker threads, so mutating
    // the process environment here is still safe.
    unsafe {
        env::set_var("JWT_SECRET", "test-secret-key");
        env::set_var("JWT_DURATION_MINUTES", "5");
    }
    Config::init(".env");
}

/// Builds a router over a fresh in-memory database, returning the state as
/// well so tests can assert directly against the store.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db);
    (routes(app_state.clone()), app_state)
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
