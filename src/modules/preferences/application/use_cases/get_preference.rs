use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::preferences::application::domain::entities::Preference;
use crate::modules::preferences::application::ports::outgoing::PreferenceRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPreferenceError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetPreferenceUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Option<Preference>, GetPreferenceError>;
}

pub struct GetPreferenceUseCase<R>
where
    R: PreferenceRepository,
{
    repository: R,
}

impl<R> GetPreferenceUseCase<R>
where
    R: PreferenceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IGetPreferenceUseCase for GetPreferenceUseCase<R>
where
    R: PreferenceRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<Option<Preference>, GetPreferenceError> {
        self.repository
            .find_by_user(user_id)
            .await
            .map_err(|e| GetPreferenceError::RepositoryError(e.to_string()))
    }
}
