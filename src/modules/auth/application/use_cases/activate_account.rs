use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    AccountTokenService, TokenProvider, TokenPurpose, UserQuery, UserRepository,
};
use crate::modules::auth::application::services::uid_codec::decode_uid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ActivateAccountError {
    /// Covers garbled uid encoding, unknown user, wrong-purpose token,
    /// stale stamp and expiry alike. Callers never learn which one.
    #[error("Invalid activation token")]
    InvalidToken,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Session token generation failed: {0}")]
    TokenGenerationFailed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivatedUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Activation logs the user straight in, so the output carries a session.
#[derive(Debug, Clone, Serialize)]
pub struct ActivateAccountOutput {
    pub access_token: String,
    pub refresh_token: String,
    pub user: ActivatedUser,
}

#[async_trait]
pub trait IActivateAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        uid_b64: &str,
        token: &str,
    ) -> Result<ActivateAccountOutput, ActivateAccountError>;
}

pub struct ActivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    account_tokens: Arc<dyn AccountTokenService + Send + Sync>,
    session_tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> ActivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        account_tokens: Arc<dyn AccountTokenService + Send + Sync>,
        session_tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            account_tokens,
            session_tokens,
        }
    }
}

#[async_trait]
impl<Q, R> IActivateAccountUseCase for ActivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        uid_b64: &str,
        token: &str,
    ) -> Result<ActivateAccountOutput, ActivateAccountError> {
        let user_id = decode_uid(uid_b64).ok_or(ActivateAccountError::InvalidToken)?;

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ActivateAccountError::RepositoryError(e.to_string()))?
            .ok_or(ActivateAccountError::InvalidToken)?;

        // The token embeds the stamp it was issued against. Activation bumps
        // the stamp, so a second use of the same link lands here and fails.
        if !self
            .account_tokens
            .validate(TokenPurpose::Activate, user.id, &user.security_stamp, token)
        {
            return Err(ActivateAccountError::InvalidToken);
        }

        self.repository
            .activate_user(user.id, User::fresh_security_stamp())
            .await
            .map_err(|e| ActivateAccountError::RepositoryError(e.to_string()))?;

        let access_token = self
            .session_tokens
            .generate_access_token(user.id)
            .map_err(|e| ActivateAccountError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .session_tokens
            .generate_refresh_token(user.id)
            .map_err(|e| ActivateAccountError::TokenGenerationFailed(e.to_string()))?;

        Ok(ActivateAccountOutput {
            access_token,
            refresh_token,
            user: ActivatedUser {
                id: user.id,
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
            },
        })
    }
}
