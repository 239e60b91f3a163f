use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::preferences::application::domain::entities::Preference;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PreferenceRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Insert-or-replace; a user has at most one preference row.
    async fn upsert(&self, preference: Preference) -> Result<Preference, PreferenceRepositoryError>;

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Preference>, PreferenceRepositoryError>;
}
