use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::reputation::application::domain::entities::{Rating, RatingRole};
use crate::modules::reputation::application::ports::outgoing::{
    NewRating, RatingRepository, RatingRepositoryError,
};

use super::sea_orm_entity::ratings;

#[derive(Clone, Debug)]
pub struct RatingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RatingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_rating(model: ratings::Model) -> Result<Rating, RatingRepositoryError> {
        // A role column holding anything but SELLER/BUYER is corrupt data,
        // not something to paper over with a default.
        let role = RatingRole::parse(&model.role).ok_or_else(|| {
            RatingRepositoryError::DatabaseError(format!(
                "unrecognized rating role in row {}: {}",
                model.id, model.role
            ))
        })?;

        Ok(Rating {
            id: model.id,
            rater_id: model.rater_id,
            ratee_id: model.ratee_id,
            role,
            score: model.score,
            comment: model.comment,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        })
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryPostgres {
    async fn add_rating(&self, rating: NewRating) -> Result<Rating, RatingRepositoryError> {
        let inserted = ratings::ActiveModel {
            id: Set(Uuid::new_v4()),
            rater_id: Set(rating.rater_id),
            ratee_id: Set(rating.ratee_id),
            role: Set(rating.role.as_str().to_string()),
            score: Set(rating.score),
            comment: Set(rating.comment),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| RatingRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_to_rating(inserted)
    }

    async fn scores_for(
        &self,
        ratee_id: Uuid,
        role: RatingRole,
    ) -> Result<Vec<i16>, RatingRepositoryError> {
        let rows = ratings::Entity::find()
            .filter(ratings::Column::RateeId.eq(ratee_id))
            .filter(ratings::Column::Role.eq(role.as_str()))
            .all(&*self.db)
            .await
            .map_err(|e| RatingRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|r| r.score).collect())
    }
}
