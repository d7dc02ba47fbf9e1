//! Auth Middleware
//!
//! Resolves the session cookie and stores the caller's identity in request
//! extensions as `kernel::extract::AuthenticatedUser`, so protected routes
//! in other crates never see session internals.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::extract::AuthenticatedUser;
use platform::cookie::extract_cookie;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid session on the route.
///
/// On success the request carries an `AuthenticatedUser` extension.
pub async fn require_session<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(req.headers(), &state.config.session_cookie_name)
        .ok_or_else(|| AuthError::SessionInvalid.into_response())?;

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = use_case
        .get_session(&token)
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut()
        .insert(AuthenticatedUser::new(session.user_id));

    Ok(next.run(req).await)
}
