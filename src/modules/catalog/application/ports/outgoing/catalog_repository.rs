use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{
    CarBrand, CarCondition, CarListing, CarModel, FuelType, TransmissionType,
};

#[derive(Debug, thiserror::Error)]
pub enum CatalogRepositoryError {
    #[error("Referenced row not found")]
    ForeignKeyViolation,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Everything needed to insert a listing; id, status and timestamps are
/// assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub owner_id: Uuid,
    pub year: i32,
    pub model_id: i32,
    pub fuel_type_id: i32,
    pub transmission_type_id: i32,
    pub registration_no: String,
    pub odometer: i32,
    pub price: f64,
    pub condition: CarCondition,
    pub prev_owner_count: i32,
    pub location: String,
    pub description: String,
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn add_brand(&self, name: String) -> Result<CarBrand, CatalogRepositoryError>;

    async fn add_model(
        &self,
        brand_id: i32,
        name: String,
    ) -> Result<CarModel, CatalogRepositoryError>;

    async fn add_fuel_type(&self, name: String) -> Result<FuelType, CatalogRepositoryError>;

    async fn add_transmission_type(
        &self,
        name: String,
    ) -> Result<TransmissionType, CatalogRepositoryError>;

    async fn create_listing(
        &self,
        listing: NewListing,
    ) -> Result<CarListing, CatalogRepositoryError>;
}
