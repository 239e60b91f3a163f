use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::ports::outgoing::{TokenProvider, TokenRepository};
use crate::modules::auth::application::services::token_hash::hash_token;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Invalid refresh token")]
    InvalidToken,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenOutput {
    pub access_token: String,
    pub refresh_token: String,
}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenOutput, RefreshTokenError>;
}

/// Exchanges a live refresh token for a fresh token pair. A token revoked at
/// logout is refused even while its signature still verifies; the caller is
/// expected to discard the token it sent in once rotation succeeds.
pub struct RefreshTokenUseCase<T>
where
    T: TokenRepository + Send + Sync,
{
    token_repository: T,
    session_tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<T> RefreshTokenUseCase<T>
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
impl<T> IRefreshTokenUseCase for RefreshTokenUseCase<T>
where
    T: TokenRepository + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenOutput, RefreshTokenError> {
        let claims = match self.session_tokens.verify_token(refresh_token) {
            Ok(claims) if claims.token_type == "refresh" => claims,
            _ => return Err(RefreshTokenError::InvalidToken),
        };

        let revoked = self
            .token_repository
            .is_token_blacklisted(&hash_token(refresh_token))
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;
        if revoked {
            return Err(RefreshTokenError::InvalidToken);
        }

        let access_token = self
            .session_tokens
            .generate_access_token(claims.sub)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .session_tokens
            .generate_refresh_token(claims.sub)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        Ok(RefreshTokenOutput {
            access_token,
            refresh_token,
        })
    }
}
