use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email, wrong password and not-yet-activated account all
    /// collapse into this variant so the response does not reveal which
    /// addresses exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginOutput {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[async_trait]
pub trait ILoginUseCase: Send + Sync {
    async fn execute(&self, input: LoginInput) -> Result<LoginOutput, LoginError>;
}

pub struct LoginUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    session_tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        session_tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            session_tokens,
        }
    }
}

#[async_trait]
impl<Q> ILoginUseCase for LoginUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, input: LoginInput) -> Result<LoginOutput, LoginError> {
        let user = self
            .query
            .find_by_email(&input.email)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let password_matches = self
            .hasher
            .verify_password(&input.password, &user.password_hash)
            .await
            .map_err(|_| LoginError::InvalidCredentials)?;

        if !password_matches || !user.is_active {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .session_tokens
            .generate_access_token(user.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .session_tokens
            .generate_refresh_token(user.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginOutput {
            access_token,
            refresh_token,
            user_id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        })
    }
}
