//! Demo token authentication.
//!
//! Tokens arrive in `X-Auth-Token` or `Authorization` (with or without
//! a `Bearer ` prefix) and map to a role through a static table. The
//! hierarchy is flat: admin satisfies any nurse requirement.

use std::collections::HashMap;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::models::Role;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing or unknown token")]
    Unauthorized,
    #[error("insufficient role")]
    Forbidden,
}

/// Token → role lookup table.
pub struct TokenTable {
    tokens: HashMap<String, Role>,
}

impl TokenTable {
    pub fn new(pairs: &[(String, Role)]) -> Self {
        Self {
            tokens: pairs.iter().cloned().collect(),
        }
    }

    pub fn role_for(&self, token: &str) -> Option<Role> {
        self.tokens.get(token).copied()
    }

    /// Resolve the request's role and check it against a minimum.
    pub fn require_role(&self, headers: &HeaderMap, min: Role) -> Result<Role, AuthError> {
        let token = token_from_headers(headers).ok_or(AuthError::Unauthorized)?;
        let role = self.role_for(token).ok_or(AuthError::Unauthorized)?;
        if role.satisfies(min) {
            Ok(role)
        } else {
            Err(AuthError::Forbidden)
        }
    }
}

/// Pull the token out of `X-Auth-Token` first, then `Authorization`.
/// A `Bearer ` prefix is stripped; anything else is taken verbatim.
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = headers.get("X-Auth-Token").and_then(|v| v.to_str().ok()) {
        return Some(token);
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.strip_prefix("Bearer ").unwrap_or(v))
}
