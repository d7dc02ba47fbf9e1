//! Logout Use Case
//!
//! Deletes the server-side session for a presented token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::verify_session_token;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = verify_session_token(&self.config.session_secret, session_token)
            .ok_or(AuthError::SessionInvalid)?;

        self.session_repo.delete(&session_id).await?;

        tracing::info!(session_id = %session_id, "Session closed");

        Ok(())
    }
}
