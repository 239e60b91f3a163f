use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::orders::application::domain::entities::{Order, OrderStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderRepositoryError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_order(
        &self,
        seller_id: Uuid,
        buyer_id: Uuid,
        car_id: Uuid,
    ) -> Result<Order, OrderRepositoryError>;

    async fn find_order(&self, order_id: Uuid) -> Result<Option<Order>, OrderRepositoryError>;

    async fn find_by_parties(
        &self,
        seller_id: Uuid,
        buyer_id: Uuid,
        car_id: Uuid,
    ) -> Result<Option<Order>, OrderRepositoryError>;

    async fn set_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrderRepositoryError>;
}
