use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::auth::application::ports::outgoing::{
    AccountTokenService, TokenPurpose, UserQuery,
};
use crate::modules::email::application::ports::outgoing::AccountNotifier;
use crate::modules::auth::application::services::uid_codec::encode_uid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Reset token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Failed to send password reset email")]
    EmailSendingFailed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestPasswordResetInput {
    pub email: String,
}

#[async_trait]
pub trait IRequestPasswordResetUseCase: Send + Sync {
    async fn execute(
        &self,
        input: RequestPasswordResetInput,
    ) -> Result<(), RequestPasswordResetError>;
}

/// Succeeds with the same empty result whether or not an account exists for
/// the address, so the endpoint cannot be used to enumerate users. An email
/// only goes out when there is an account to reset.
pub struct RequestPasswordResetUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    account_tokens: Arc<dyn AccountTokenService + Send + Sync>,
    notifier: Arc<dyn AccountNotifier + Send + Sync>,
}

impl<Q> RequestPasswordResetUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        account_tokens: Arc<dyn AccountTokenService + Send + Sync>,
        notifier: Arc<dyn AccountNotifier + Send + Sync>,
    ) -> Self {
        Self {
            query,
            account_tokens,
            notifier,
        }
    }
}

#[async_trait]
impl<Q> IRequestPasswordResetUseCase for RequestPasswordResetUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        input: RequestPasswordResetInput,
    ) -> Result<(), RequestPasswordResetError> {
        let user = match self
            .query
            .find_by_email(&input.email)
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?
        {
            Some(user) => user,
            None => return Ok(()),
        };

        let token = self
            .account_tokens
            .issue(TokenPurpose::ResetPassword, user.id, &user.security_stamp)
            .map_err(|e| RequestPasswordResetError::TokenGenerationFailed(e.to_string()))?;

        self.notifier
            .send_password_reset_email(
                &user.email,
                &user.first_name,
                &encode_uid(user.id),
                &token,
            )
            .await
            .map_err(|_| RequestPasswordResetError::EmailSendingFailed)?;

        Ok(())
    }
}
