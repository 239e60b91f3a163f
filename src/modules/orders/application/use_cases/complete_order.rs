use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::orders::application::domain::entities::{Order, OrderStatus};
use crate::modules::orders::application::ports::outgoing::OrderRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompleteOrderError {
    #[error("Order not found")]
    OrderNotFound,

    /// The order is not PENDING; completing it again (or completing from any
    /// other state) is rejected rather than silently ignored.
    #[error("Order cannot be completed from its current status")]
    InvalidTransition,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICompleteOrderUseCase: Send + Sync {
    async fn execute(&self, order_id: Uuid) -> Result<Order, CompleteOrderError>;
}

pub struct CompleteOrderUseCase<R>
where
    R: OrderRepository,
{
    repository: R,
}

impl<R> CompleteOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICompleteOrderUseCase for CompleteOrderUseCase<R>
where
    R: OrderRepository,
{
    async fn execute(&self, order_id: Uuid) -> Result<Order, CompleteOrderError> {
        let order = self
            .repository
            .find_order(order_id)
            .await
            .map_err(|e| CompleteOrderError::RepositoryError(e.to_string()))?
            .ok_or(CompleteOrderError::OrderNotFound)?;

        if order.status != OrderStatus::Pending {
            return Err(CompleteOrderError::InvalidTransition);
        }

        self.repository
            .set_status(order_id, OrderStatus::Completed)
            .await
            .map_err(|e| CompleteOrderError::RepositoryError(e.to_string()))
    }
}
