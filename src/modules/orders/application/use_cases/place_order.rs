use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::catalog::application::ports::outgoing::CatalogQuery;
use crate::modules::orders::application::domain::entities::Order;
use crate::modules::orders::application::ports::outgoing::OrderRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaceOrderError {
    /// Seller and buyer are the same user.
    #[error("A user cannot buy their own car")]
    SameParty,

    #[error("Car not found")]
    CarNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderInput {
    pub seller_id: Uuid,
    pub buyer_id: Uuid,
    pub car_id: Uuid,
}

#[async_trait]
pub trait IPlaceOrderUseCase: Send + Sync {
    async fn execute(&self, input: PlaceOrderInput) -> Result<Order, PlaceOrderError>;
}

pub struct PlaceOrderUseCase<R>
where
    R: OrderRepository,
{
    repository: R,
    catalog: Arc<dyn CatalogQuery + Send + Sync>,
}

impl<R> PlaceOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repository: R, catalog: Arc<dyn CatalogQuery + Send + Sync>) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}

#[async_trait]
impl<R> IPlaceOrderUseCase for PlaceOrderUseCase<R>
where
    R: OrderRepository,
{
    async fn execute(&self, input: PlaceOrderInput) -> Result<Order, PlaceOrderError> {
        if input.seller_id == input.buyer_id {
            return Err(PlaceOrderError::SameParty);
        }

        self.catalog
            .find_listing(input.car_id)
            .await
            .map_err(|e| PlaceOrderError::RepositoryError(e.to_string()))?
            .ok_or(PlaceOrderError::CarNotFound)?;

        self.repository
            .create_order(input.seller_id, input.buyer_id, input.car_id)
            .await
            .map_err(|e| PlaceOrderError::RepositoryError(e.to_string()))
    }
}
