use async_trait::async_trait;
use chrono::{Datelike, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{CarCondition, CarListing};
use crate::modules::catalog::application::ports::outgoing::{
    CatalogQuery, CatalogRepository, NewListing,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateListingError {
    #[error("Year must be a 4-digit year no later than the current year")]
    InvalidYear,

    #[error("Price must be greater than zero")]
    InvalidPrice,

    #[error("Odometer must not be negative")]
    InvalidOdometer,

    #[error("Unknown condition value")]
    InvalidCondition,

    #[error("Model not found")]
    ModelNotFound,

    #[error("Fuel type not found")]
    FuelTypeNotFound,

    #[error("Transmission type not found")]
    TransmissionTypeNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateListingInput {
    pub owner_id: Uuid,
    pub year: i32,
    pub model_id: i32,
    pub fuel_type_id: i32,
    pub transmission_type_id: i32,
    pub registration_no: String,
    pub odometer: i32,
    pub price: f64,
    pub condition: String,
    pub prev_owner_count: i32,
    pub location: String,
    pub description: String,
}

#[async_trait]
pub trait ICreateListingUseCase: Send + Sync {
    async fn execute(&self, input: CreateListingInput) -> Result<CarListing, CreateListingError>;
}

pub struct CreateListingUseCase<Q, R>
where
    Q: CatalogQuery,
    R: CatalogRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateListingUseCase<Q, R>
where
    Q: CatalogQuery,
    R: CatalogRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> ICreateListingUseCase for CreateListingUseCase<Q, R>
where
    Q: CatalogQuery,
    R: CatalogRepository,
{
    async fn execute(&self, input: CreateListingInput) -> Result<CarListing, CreateListingError> {
        let current_year = Utc::now().year();
        if input.year < 1000 || input.year > current_year {
            return Err(CreateListingError::InvalidYear);
        }

        if input.price <= 0.0 {
            return Err(CreateListingError::InvalidPrice);
        }

        if input.odometer < 0 {
            return Err(CreateListingError::InvalidOdometer);
        }

        let condition =
            CarCondition::parse(&input.condition).ok_or(CreateListingError::InvalidCondition)?;

        self.query
            .find_model(input.model_id)
            .await
            .map_err(|e| CreateListingError::RepositoryError(e.to_string()))?
            .ok_or(CreateListingError::ModelNotFound)?;

        self.query
            .find_fuel_type(input.fuel_type_id)
            .await
            .map_err(|e| CreateListingError::RepositoryError(e.to_string()))?
            .ok_or(CreateListingError::FuelTypeNotFound)?;

        self.query
            .find_transmission_type(input.transmission_type_id)
            .await
            .map_err(|e| CreateListingError::RepositoryError(e.to_string()))?
            .ok_or(CreateListingError::TransmissionTypeNotFound)?;

        self.repository
            .create_listing(NewListing {
                owner_id: input.owner_id,
                year: input.year,
                model_id: input.model_id,
                fuel_type_id: input.fuel_type_id,
                transmission_type_id: input.transmission_type_id,
                registration_no: input.registration_no,
                odometer: input.odometer,
                price: input.price,
                condition,
                prev_owner_count: input.prev_owner_count,
                location: input.location,
                description: input.description,
            })
            .await
            .map_err(|e| CreateListingError::RepositoryError(e.to_string()))
    }
}
