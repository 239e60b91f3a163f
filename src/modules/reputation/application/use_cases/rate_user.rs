use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::reputation::application::domain::entities::{Rating, RatingRole};
use crate::modules::reputation::application::ports::outgoing::{NewRating, RatingRepository};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RateUserError {
    #[error("Score must be between 1 and 5")]
    InvalidScore,

    #[error("Users cannot rate themselves")]
    SelfRating,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct RateUserInput {
    pub rater_id: Uuid,
    pub ratee_id: Uuid,
    pub role: RatingRole,
    pub score: i16,
    pub comment: Option<String>,
}

#[async_trait]
pub trait IRateUserUseCase: Send + Sync {
    async fn execute(&self, input: RateUserInput) -> Result<Rating, RateUserError>;
}

pub struct RateUserUseCase<R>
where
    R: RatingRepository,
{
    repository: R,
    users: Arc<dyn UserQuery + Send + Sync>,
}

impl<R> RateUserUseCase<R>
where
    R: RatingRepository,
{
    pub fn new(repository: R, users: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { repository, users }
    }
}

#[async_trait]
impl<R> IRateUserUseCase for RateUserUseCase<R>
where
    R: RatingRepository,
{
    async fn execute(&self, input: RateUserInput) -> Result<Rating, RateUserError> {
        // Guard order is part of the contract: score, then self-rating, then
        // target resolution.
        if !(1..=5).contains(&input.score) {
            return Err(RateUserError::InvalidScore);
        }

        if input.rater_id == input.ratee_id {
            return Err(RateUserError::SelfRating);
        }

        self.users
            .find_by_id(input.ratee_id)
            .await
            .map_err(|e| RateUserError::RepositoryError(e.to_string()))?
            .ok_or(RateUserError::UserNotFound)?;

        self.repository
            .add_rating(NewRating {
                rater_id: input.rater_id,
                ratee_id: input.ratee_id,
                role: input.role,
                score: input.score,
                comment: input.comment,
            })
            .await
            .map_err(|e| RateUserError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{User, UserProfile};
    use crate::modules::auth::application::ports::outgoing::UserQueryError;
    use crate::modules::reputation::application::ports::outgoing::RatingRepositoryError;
    use chrono::Utc;
    use std::sync::Mutex;

    struct MockUsers {
        known: Vec<Uuid>,
    }

    #[async_trait]
    impl UserQuery for MockUsers {
        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            if !self.known.contains(&user_id) {
                return Ok(None);
            }
            Ok(Some(User {
                id: user_id,
                email: "a@x.com".to_string(),
                first_name: "Alice".to_string(),
                last_name: "Nguyen".to_string(),
                password_hash: "hash".to_string(),
                is_active: true,
                security_stamp: "stamp".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn find_profile_by_mobile(
            &self,
            _mobile: &str,
        ) -> Result<Option<UserProfile>, UserQueryError> {
            Ok(None)
        }
    }

    #[derive(Default)]
    struct MockRepository {
        ratings: Mutex<Vec<NewRating>>,
    }

    #[async_trait]
    impl RatingRepository for MockRepository {
        async fn add_rating(&self, rating: NewRating) -> Result<Rating, RatingRepositoryError> {
            self.ratings.lock().unwrap().push(rating.clone());
            Ok(Rating {
                id: Uuid::new_v4(),
                rater_id: rating.rater_id,
                ratee_id: rating.ratee_id,
                role: rating.role,
                score: rating.score,
                comment: rating.comment,
                created_at: Utc::now(),
            })
        }

        async fn scores_for(
            &self,
            _ratee_id: Uuid,
            _role: RatingRole,
        ) -> Result<Vec<i16>, RatingRepositoryError> {
            Ok(vec![])
        }
    }

    fn input(rater: Uuid, ratee: Uuid, score: i16) -> RateUserInput {
        RateUserInput {
            rater_id: rater,
            ratee_id: ratee,
            role: RatingRole::Seller,
            score,
            comment: None,
        }
    }

    #[tokio::test]
    async fn valid_rating_is_recorded() {
        let ratee = Uuid::new_v4();
        let uc = RateUserUseCase::new(
            MockRepository::default(),
            Arc::new(MockUsers { known: vec![ratee] }),
        );

        let rating = uc.execute(input(Uuid::new_v4(), ratee, 4)).await.unwrap();

        assert_eq!(rating.score, 4);
        assert_eq!(rating.ratee_id, ratee);
        assert_eq!(uc.repository.ratings.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn out_of_range_scores_are_rejected() {
        let ratee = Uuid::new_v4();
        let uc = RateUserUseCase::new(
            MockRepository::default(),
            Arc::new(MockUsers { known: vec![ratee] }),
        );

        for score in [0, 6, -1] {
            let result = uc.execute(input(Uuid::new_v4(), ratee, score)).await;
            assert!(
                matches!(result, Err(RateUserError::InvalidScore)),
                "score {} should be rejected",
                score
            );
        }
        assert!(uc.repository.ratings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn self_rating_is_rejected() {
        let party = Uuid::new_v4();
        let uc = RateUserUseCase::new(
            MockRepository::default(),
            Arc::new(MockUsers { known: vec![party] }),
        );

        let result = uc.execute(input(party, party, 5)).await;

        assert!(matches!(result, Err(RateUserError::SelfRating)));
    }

    #[tokio::test]
    async fn invalid_score_wins_over_self_rating() {
        let party = Uuid::new_v4();
        let uc = RateUserUseCase::new(
            MockRepository::default(),
            Arc::new(MockUsers { known: vec![party] }),
        );

        let result = uc.execute(input(party, party, 9)).await;

        assert!(matches!(result, Err(RateUserError::InvalidScore)));
    }

    #[tokio::test]
    async fn unknown_ratee_is_rejected() {
        let uc = RateUserUseCase::new(
            MockRepository::default(),
            Arc::new(MockUsers { known: vec![] }),
        );

        let result = uc.execute(input(Uuid::new_v4(), Uuid::new_v4(), 3)).await;

        assert!(matches!(result, Err(RateUserError::UserNotFound)));
    }
}
