use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::modules::auth::application::ports::outgoing::{
    TokenProvider, TokenRepository,
};
use crate::modules::auth::application::services::token_hash::hash_token;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid refresh token")]
    InvalidToken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<(), LogoutError>;
}

/// Revokes a refresh token by blacklisting its hash until the token would
/// have expired on its own. Logging out twice with the same token succeeds
/// both times.
pub struct LogoutUseCase<T>
where
    T: TokenRepository + Send + Sync,
{
    token_repository: T,
    session_tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<T> LogoutUseCase<T>
where
    T: TokenRepository + Send + Sync,
{
    pub fn new(token_repository: T, session_tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            token_repository,
            session_tokens,
        }
    }
}

#[async_trait]
impl<T> ILogoutUseCase for LogoutUseCase<T>
where
    T: TokenRepository + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<(), LogoutError> {
        let claims = match self.session_tokens.verify_token(refresh_token) {
            Ok(claims) if claims.token_type == "refresh" => claims,
            // An already-expired token needs no blacklist entry.
            Err(crate::modules::auth::application::ports::outgoing::TokenError::Expired) => {
                return Ok(())
            }
            _ => return Err(LogoutError::InvalidToken),
        };

        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or(LogoutError::InvalidToken)?;

        self.token_repository
            .blacklist_token(&hash_token(refresh_token), claims.sub, expires_at)
            .await
            .map_err(|e| LogoutError::RepositoryError(e.to_string()))?;

        Ok(())
    }
}
