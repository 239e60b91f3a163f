use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::CarListing;
use crate::modules::catalog::application::ports::outgoing::CatalogQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetListingError {
    #[error("Listing not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetListingUseCase: Send + Sync {
    async fn execute(&self, listing_id: Uuid) -> Result<CarListing, GetListingError>;
}

pub struct GetListingUseCase<Q>
where
    Q: CatalogQuery,
{
    query: Q,
}

impl<Q> GetListingUseCase<Q>
where
    Q: CatalogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetListingUseCase for GetListingUseCase<Q>
where
    Q: CatalogQuery,
{
    async fn execute(&self, listing_id: Uuid) -> Result<CarListing, GetListingError> {
        self.query
            .find_listing(listing_id)
            .await
            .map_err(|e| GetListingError::RepositoryError(e.to_string()))?
            .ok_or(GetListingError::NotFound)
    }
}
