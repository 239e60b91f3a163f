use crate::modules::auth::application::domain::entities::{User, UserProfile};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;

    /// Lookup by email. Emails are stored lowercased, implementations
    /// lowercase the argument, so the comparison is case-insensitive.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    async fn find_profile_by_mobile(
        &self,
        mobile: &str,
    ) -> Result<Option<UserProfile>, UserQueryError>;
}
