use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use axum_extra::extract::TypedHeader;
use common::config::Config;
use headers::{authorization::Bearer, Authorization};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::auth::claims::{AuthUser, Claims};

/// Extracts an `AuthUser` from the `Authorization: Bearer` header, verifying
/// the JWT against `JWT_SECRET`.
///
/// # Errors
/// Rejects with `401 Unauthorized` when the header is missing or malformed,
/// or the token is invalid or expired.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| (StatusCode::UNAUTHORIZED, "Bearer token required"))?;

        let config = Config::get();
        let verified = decode::<Claims>(
            bearer.token(),
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| (StatusCode::UNAUTHORIZED, "Token verification failed"))?;

        Ok(AuthUser(verified.claims))
    }
}
