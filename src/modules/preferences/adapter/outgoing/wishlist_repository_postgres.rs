use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::preferences::application::ports::outgoing::{
    WishlistRepository, WishlistRepositoryError,
};

use super::sea_orm_entity::wishlist_cars;

#[derive(Clone, Debug)]
pub struct WishlistRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl WishlistRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn add(&self, user_id: Uuid, car_id: Uuid) -> Result<(), WishlistRepositoryError> {
        let active = wishlist_cars::ActiveModel {
            user_id: Set(user_id),
            car_id: Set(car_id),
            created_at: Set(Utc::now().into()),
        };

        let result = wishlist_cars::Entity::insert(active)
            .on_conflict(
                OnConflict::columns([
                    wishlist_cars::Column::UserId,
                    wishlist_cars::Column::CarId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(&*self.db)
            .await;

        match result {
            Ok(_) => Ok(()),
            // ON CONFLICT DO NOTHING surfaces as RecordNotInserted.
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(WishlistRepositoryError::DatabaseError(e.to_string())),
        }
    }

    async fn remove(&self, user_id: Uuid, car_id: Uuid) -> Result<(), WishlistRepositoryError> {
        wishlist_cars::Entity::delete_many()
            .filter(wishlist_cars::Column::UserId.eq(user_id))
            .filter(wishlist_cars::Column::CarId.eq(car_id))
            .exec(&*self.db)
            .await
            .map_err(|e| WishlistRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Uuid>, WishlistRepositoryError> {
        let rows = wishlist_cars::Entity::find()
            .filter(wishlist_cars::Column::UserId.eq(user_id))
            .all(&*self.db)
            .await
            .map_err(|e| WishlistRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|r| r.car_id).collect())
    }
}
