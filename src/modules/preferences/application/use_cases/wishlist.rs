use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::ports::outgoing::CatalogQuery;
use crate::modules::preferences::application::ports::outgoing::WishlistRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum WishlistError {
    #[error("Car not found")]
    CarNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Add, remove and list are one use case; they share the repository and none
/// carries logic beyond the car-existence check on add.
#[async_trait]
pub trait IWishlistUseCase: Send + Sync {
    async fn add(&self, user_id: Uuid, car_id: Uuid) -> Result<(), WishlistError>;
    async fn remove(&self, user_id: Uuid, car_id: Uuid) -> Result<(), WishlistError>;
    async fn list(&self, user_id: Uuid) -> Result<Vec<Uuid>, WishlistError>;
}

pub struct WishlistUseCase<R>
where
    R: WishlistRepository,
{
    repository: R,
    catalog: Arc<dyn CatalogQuery + Send + Sync>,
}

impl<R> WishlistUseCase<R>
where
    R: WishlistRepository,
{
    pub fn new(repository: R, catalog: Arc<dyn CatalogQuery + Send + Sync>) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}

#[async_trait]
impl<R> IWishlistUseCase for WishlistUseCase<R>
where
    R: WishlistRepository,
{
    async fn add(&self, user_id: Uuid, car_id: Uuid) -> Result<(), WishlistError> {
        self.catalog
            .find_listing(car_id)
            .await
            .map_err(|e| WishlistError::RepositoryError(e.to_string()))?
            .ok_or(WishlistError::CarNotFound)?;

        self.repository
            .add(user_id, car_id)
            .await
            .map_err(|e| WishlistError::RepositoryError(e.to_string()))
    }

    async fn remove(&self, user_id: Uuid, car_id: Uuid) -> Result<(), WishlistError> {
        self.repository
            .remove(user_id, car_id)
            .await
            .map_err(|e| WishlistError::RepositoryError(e.to_string()))
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Uuid>, WishlistError> {
        self.repository
            .list(user_id)
            .await
            .map_err(|e| WishlistError::RepositoryError(e.to_string()))
    }
}
