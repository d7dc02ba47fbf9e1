//! Axum extractors shared across feature crates.
//!
//! The auth middleware resolves the session cookie and stores the caller's
//! identity in request extensions; protected handlers in any crate pull it
//! back out with [`AuthenticatedUser`] without depending on the auth crate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::app_error::AppError;
use crate::id::UserId;

/// The verified identity of the calling user.
///
/// Inserted into request extensions by the auth middleware. Extracting it in
/// a handler that is not behind the middleware fails with 401.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl AuthenticatedUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}
