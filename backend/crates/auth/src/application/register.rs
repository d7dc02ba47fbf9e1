//! Register Use Case
//!
//! Creates a new user account and opens its first session.

use std::sync::Arc;

use chrono::Duration;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::{credential::Credential, session::Session, user::User};
use crate::domain::repository::{CredentialRepository, SessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: String,
    pub session_token: String,
}

/// Register use case
pub struct RegisterUseCase<U, C, S>
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

impl<U, C, S> RegisterUseCase<U, C, S>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let email = Email::new(&input.email)
            .map_err(|e| AuthError::EmailValidation(e.to_string()))?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let mut user = User::new(email);
        user.record_login();

        let credential = Credential::new(user.user_id, password_hash);

        self.user_repo.create(&user).await?;
        self.credential_repo.create(&credential).await?;

        // Open the first session so the client is signed in immediately
        let ttl = Duration::from_std(self.config.session_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;
        let session = Session::open(user.user_id, ttl);
        self.session_repo.create(&session).await?;

        let session_token = sign_session_token(&self.config.session_secret, &session.session_id);

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id.to_string(),
            session_token,
        })
    }
}
