use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum WishlistRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Adding a car that is already wished is a no-op.
    async fn add(&self, user_id: Uuid, car_id: Uuid) -> Result<(), WishlistRepositoryError>;

    async fn remove(&self, user_id: Uuid, car_id: Uuid) -> Result<(), WishlistRepositoryError>;

    async fn list(&self, user_id: Uuid) -> Result<Vec<Uuid>, WishlistRepositoryError>;
}
