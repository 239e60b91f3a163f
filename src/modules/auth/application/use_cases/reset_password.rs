use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    AccountTokenService, PasswordHasher, TokenPurpose, UserQuery, UserRepository,
};
use crate::modules::auth::application::services::uid_codec::decode_uid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordError {
    /// Garbled uid, unknown user, expired token and already-used token all
    /// surface identically.
    #[error("Invalid password reset token")]
    InvalidToken,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("New password must differ from the current one")]
    SameAsOldPassword,

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordInput {
    pub uid: String,
    pub token: String,
    pub password1: String,
    pub password2: String,
}

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, input: ResetPasswordInput) -> Result<(), ResetPasswordError>;
}

pub struct ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    account_tokens: Arc<dyn AccountTokenService + Send + Sync>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        account_tokens: Arc<dyn AccountTokenService + Send + Sync>,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            account_tokens,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IResetPasswordUseCase for ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: ResetPasswordInput) -> Result<(), ResetPasswordError> {
        // Token validity is checked before the password fields so a stale
        // link is reported as such even when the form is also wrong.
        let user_id = decode_uid(&input.uid).ok_or(ResetPasswordError::InvalidToken)?;

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::InvalidToken)?;

        if !self.account_tokens.validate(
            TokenPurpose::ResetPassword,
            user.id,
            &user.security_stamp,
            &input.token,
        ) {
            return Err(ResetPasswordError::InvalidToken);
        }

        if input.password1 != input.password2 {
            return Err(ResetPasswordError::PasswordMismatch);
        }

        let same_as_old = self
            .hasher
            .verify_password(&input.password1, &user.password_hash)
            .await
            .unwrap_or(false);
        if same_as_old {
            return Err(ResetPasswordError::SameAsOldPassword);
        }

        let new_hash = self
            .hasher
            .hash_password(&input.password1)
            .await
            .map_err(|_| ResetPasswordError::HashingFailed)?;

        // Bumping the stamp invalidates this reset token and any other
        // outstanding account token.
        self.repository
            .update_password(user.id, new_hash, User::fresh_security_stamp())
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?;

        Ok(())
    }
}
