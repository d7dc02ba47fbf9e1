//! Login Use Case
//!
//! Verifies credentials and opens a session. Every failure mode maps to
//! the same `InvalidCredentials` so responses do not leak which part was
//! wrong.

use std::sync::Arc;

use chrono::Duration;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{CredentialRepository, SessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub user_id: String,
    pub session_token: String,
}

/// Login use case
pub struct LoginUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, C, S> LoginUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        credential_repo: Arc<C>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let mut user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let credential = self
            .credential_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !credential
            .password_hash
            .verify(&password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        user.record_login();
        self.user_repo.update(&user).await?;

        let ttl = Duration::from_std(self.config.session_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;
        let session = Session::open(user.user_id, ttl);
        self.session_repo.create(&session).await?;

        let session_token = sign_session_token(&self.config.session_secret, &session.session_id);

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            user_id: user.user_id.to_string(),
            session_token,
        })
    }
}
