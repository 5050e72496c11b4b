use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, Empty};

fn deny(status: StatusCode, message: &str) -> (StatusCode, Json<ApiResponse<Empty>>) {
    (status, Json(ApiResponse::error(message)))
}

/// Admin-only guard for destructive routes. Verifies the bearer token and
/// the admin capability before the handler runs, so rejected requests never
/// touch the request body or the store. The verified claims are inserted
/// into the request extensions for handlers and the request logger.
pub async fn allow_admin(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (mut parts, body) = req.into_parts();

    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| deny(StatusCode::UNAUTHORIZED, "Authentication required"))?;

    if !user.0.admin {
        return Err(deny(StatusCode::FORBIDDEN, "Admin access required"));
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
