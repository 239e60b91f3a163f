use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::orders::application::domain::entities::{Order, OrderStatus};
use crate::modules::orders::application::ports::outgoing::{
    OrderRepository, OrderRepositoryError,
};

use super::sea_orm_entity::orders;

#[derive(Clone, Debug)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_order(model: orders::Model) -> Order {
        Order {
            id: model.id,
            seller_id: model.seller_id,
            buyer_id: model.buyer_id,
            car_id: model.car_id,
            status: OrderStatus::parse(&model.status).unwrap_or(OrderStatus::Pending),
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn create_order(
        &self,
        seller_id: Uuid,
        buyer_id: Uuid,
        car_id: Uuid,
    ) -> Result<Order, OrderRepositoryError> {
        let inserted = orders::ActiveModel {
            id: Set(Uuid::new_v4()),
            seller_id: Set(seller_id),
            buyer_id: Set(buyer_id),
            car_id: Set(car_id),
            status: Set(OrderStatus::Pending.as_str().to_string()),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_order(inserted))
    }

    async fn find_order(&self, order_id: Uuid) -> Result<Option<Order>, OrderRepositoryError> {
        let found = orders::Entity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.map(Self::map_to_order))
    }

    async fn find_by_parties(
        &self,
        seller_id: Uuid,
        buyer_id: Uuid,
        car_id: Uuid,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        let found = orders::Entity::find()
            .filter(orders::Column::SellerId.eq(seller_id))
            .filter(orders::Column::BuyerId.eq(buyer_id))
            .filter(orders::Column::CarId.eq(car_id))
            .one(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.map(Self::map_to_order))
    }

    async fn set_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrderRepositoryError> {
        let order = orders::Entity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(OrderRepositoryError::OrderNotFound)?;

        let mut active: orders::ActiveModel = order.into();
        active.status = Set(status.as_str().to_string());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_order(updated))
    }
}
