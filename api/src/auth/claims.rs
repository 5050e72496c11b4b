use serde::{Deserialize, Serialize};

/// JWT claims carried by admin-capable tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Identifier of the token holder.
    pub sub: i64,
    /// Expiry as a Unix timestamp.
    pub exp: usize,
    /// Whether the holder may call admin-only routes.
    pub admin: bool,
}

/// A verified token holder, inserted into request extensions by the guards.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
