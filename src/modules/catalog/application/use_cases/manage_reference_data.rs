use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::{
    CarBrand, CarModel, FuelType, TransmissionType,
};
use crate::modules::catalog::application::ports::outgoing::{
    CatalogQuery, CatalogRepository,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Brand not found")]
    BrandNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// The four reference tables share one tiny creation flow, so they live in a
/// single use case.
#[async_trait]
pub trait ICatalogReferenceUseCase: Send + Sync {
    async fn add_brand(&self, name: &str) -> Result<CarBrand, ReferenceDataError>;
    async fn add_model(&self, brand_id: i32, name: &str) -> Result<CarModel, ReferenceDataError>;
    async fn add_fuel_type(&self, name: &str) -> Result<FuelType, ReferenceDataError>;
    async fn add_transmission_type(
        &self,
        name: &str,
    ) -> Result<TransmissionType, ReferenceDataError>;
}

pub struct CatalogReferenceUseCase<Q, R>
where
    Q: CatalogQuery,
    R: CatalogRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CatalogReferenceUseCase<Q, R>
where
    Q: CatalogQuery,
    R: CatalogRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

fn normalized(name: &str) -> Result<String, ReferenceDataError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ReferenceDataError::EmptyName);
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl<Q, R> ICatalogReferenceUseCase for CatalogReferenceUseCase<Q, R>
where
    Q: CatalogQuery,
    R: CatalogRepository,
{
    async fn add_brand(&self, name: &str) -> Result<CarBrand, ReferenceDataError> {
        let name = normalized(name)?;
        self.repository
            .add_brand(name)
            .await
            .map_err(|e| ReferenceDataError::RepositoryError(e.to_string()))
    }

    async fn add_model(&self, brand_id: i32, name: &str) -> Result<CarModel, ReferenceDataError> {
        let name = normalized(name)?;

        self.query
            .find_brand(brand_id)
            .await
            .map_err(|e| ReferenceDataError::RepositoryError(e.to_string()))?
            .ok_or(ReferenceDataError::BrandNotFound)?;

        self.repository
            .add_model(brand_id, name)
            .await
            .map_err(|e| ReferenceDataError::RepositoryError(e.to_string()))
    }

    async fn add_fuel_type(&self, name: &str) -> Result<FuelType, ReferenceDataError> {
        let name = normalized(name)?;
        self.repository
            .add_fuel_type(name)
            .await
            .map_err(|e| ReferenceDataError::RepositoryError(e.to_string()))
    }

    async fn add_transmission_type(
        &self,
        name: &str,
    ) -> Result<TransmissionType, ReferenceDataError> {
        let name = normalized(name)?;
        self.repository
            .add_transmission_type(name)
            .await
            .map_err(|e| ReferenceDataError::RepositoryError(e.to_string()))
    }
}
