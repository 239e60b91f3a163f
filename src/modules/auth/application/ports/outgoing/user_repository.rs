use crate::modules::auth::application::domain::entities::{User, UserProfile};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository {
    /// Inserts the user and its profile atomically. A user without a profile
    /// is an invariant violation, so partial creation must never be visible.
    async fn create_user_with_profile(
        &self,
        user: User,
        profile: UserProfile,
    ) -> Result<User, UserRepositoryError>;

    /// Marks the account active and the email confirmed, and replaces the
    /// security stamp, all in one transaction.
    async fn activate_user(&self, user_id: Uuid, new_stamp: String)
        -> Result<(), UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
        new_stamp: String,
    ) -> Result<(), UserRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
