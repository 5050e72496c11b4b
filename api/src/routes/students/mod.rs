//! # Student Routes Module
//!
//! Wires up the `/student` endpoint group.
//!
//! ## Structure
//! - `post.rs` — register a student
//! - `get.rs` — search by filters
//! - `put.rs` — partial update by matricula
//! - `delete.rs` — remove by matricula (admin only)
//! - `common.rs` — shared payload, validation, and response types

use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::auth::guards::allow_admin;
use crate::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::remove_student;
use get::search_student;
use post::register_student;
use put::update_student;

/// Routes under `/student`. Everything is public except removal, which is
/// gated on an admin token.
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register_student))
        .route("/", get(search_student))
        .route("/", put(update_student))
        .route(
            "/",
            delete(remove_student).route_layer(from_fn(allow_admin)),
        )
}
