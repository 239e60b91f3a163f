use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::reputation::application::domain::entities::{Rating, RatingRole};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RatingRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct NewRating {
    pub rater_id: Uuid,
    pub ratee_id: Uuid,
    pub role: RatingRole,
    pub score: i16,
    pub comment: Option<String>,
}

#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn add_rating(&self, rating: NewRating) -> Result<Rating, RatingRepositoryError>;

    /// All scores given to `ratee_id` in `role`, for averaging.
    async fn scores_for(
        &self,
        ratee_id: Uuid,
        role: RatingRole,
    ) -> Result<Vec<i16>, RatingRepositoryError>;
}
