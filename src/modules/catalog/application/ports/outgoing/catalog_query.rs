use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{
    CarBrand, CarListing, CarModel, FuelType, TransmissionType,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the catalog. Other modules (orders, wishlist) depend on this
/// to check that a car id resolves.
#[async_trait]
pub trait CatalogQuery: Send + Sync {
    async fn find_brand(&self, id: i32) -> Result<Option<CarBrand>, CatalogQueryError>;

    async fn find_model(&self, id: i32) -> Result<Option<CarModel>, CatalogQueryError>;

    async fn find_fuel_type(&self, id: i32) -> Result<Option<FuelType>, CatalogQueryError>;

    async fn find_transmission_type(
        &self,
        id: i32,
    ) -> Result<Option<TransmissionType>, CatalogQueryError>;

    async fn find_listing(&self, id: Uuid) -> Result<Option<CarListing>, CatalogQueryError>;
}
