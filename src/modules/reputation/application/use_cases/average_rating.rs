use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::reputation::application::domain::entities::RatingRole;
use crate::modules::reputation::application::ports::outgoing::RatingRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AverageRatingError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IAverageRatingUseCase: Send + Sync {
    /// `None` when the user has no ratings in that role; an unrated user has
    /// no average, not an average of zero.
    async fn execute(
        &self,
        user_id: Uuid,
        role: RatingRole,
    ) -> Result<Option<f64>, AverageRatingError>;
}

pub struct AverageRatingUseCase<R>
where
    R: RatingRepository,
{
    repository: R,
}

impl<R> AverageRatingUseCase<R>
where
    R: RatingRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IAverageRatingUseCase for AverageRatingUseCase<R>
where
    R: RatingRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        role: RatingRole,
    ) -> Result<Option<f64>, AverageRatingError> {
        let scores = self
            .repository
            .scores_for(user_id, role)
            .await
            .map_err(|e| AverageRatingError::RepositoryError(e.to_string()))?;

        if scores.is_empty() {
            return Ok(None);
        }

        let sum: i64 = scores.iter().map(|&s| s as i64).sum();
        Ok(Some(sum as f64 / scores.len() as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::reputation::application::domain::entities::Rating;
    use crate::modules::reputation::application::ports::outgoing::{
        NewRating, RatingRepositoryError,
    };
    use std::collections::HashMap;

    struct MockRepository {
        scores: HashMap<(Uuid, &'static str), Vec<i16>>,
    }

    #[async_trait]
    impl RatingRepository for MockRepository {
        async fn add_rating(&self, _rating: NewRating) -> Result<Rating, RatingRepositoryError> {
            unimplemented!()
        }

        async fn scores_for(
            &self,
            ratee_id: Uuid,
            role: RatingRole,
        ) -> Result<Vec<i16>, RatingRepositoryError> {
            Ok(self
                .scores
                .get(&(ratee_id, role.as_str()))
                .cloned()
                .unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn average_of_scores() {
        let user_id = Uuid::new_v4();
        let mut scores = HashMap::new();
        scores.insert((user_id, "SELLER"), vec![3, 4, 5]);
        let uc = AverageRatingUseCase::new(MockRepository { scores });

        let average = uc.execute(user_id, RatingRole::Seller).await.unwrap();

        assert_eq!(average, Some(4.0));
    }

    #[tokio::test]
    async fn unrated_user_has_no_average() {
        let uc = AverageRatingUseCase::new(MockRepository {
            scores: HashMap::new(),
        });

        let average = uc.execute(Uuid::new_v4(), RatingRole::Buyer).await.unwrap();

        assert_eq!(average, None);
    }

    #[tokio::test]
    async fn roles_are_averaged_separately() {
        let user_id = Uuid::new_v4();
        let mut scores = HashMap::new();
        scores.insert((user_id, "SELLER"), vec![5]);
        let uc = AverageRatingUseCase::new(MockRepository { scores });

        assert_eq!(
            uc.execute(user_id, RatingRole::Seller).await.unwrap(),
            Some(5.0)
        );
        assert_eq!(uc.execute(user_id, RatingRole::Buyer).await.unwrap(), None);
    }
}
