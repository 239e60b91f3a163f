use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::preferences::application::domain::entities::Preference;
use crate::modules::preferences::application::ports::outgoing::PreferenceRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SavePreferenceError {
    #[error("Range minimum exceeds maximum: {0}")]
    InvalidRange(&'static str),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SavePreferenceInput {
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub odometer_min: Option<i32>,
    pub odometer_max: Option<i32>,
    #[serde(default)]
    pub fuel_type_ids: Vec<i32>,
    #[serde(default)]
    pub transmission_type_ids: Vec<i32>,
    #[serde(default)]
    pub model_ids: Vec<i32>,
    #[serde(default)]
    pub brand_ids: Vec<i32>,
}

#[async_trait]
pub trait ISavePreferenceUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        input: SavePreferenceInput,
    ) -> Result<Preference, SavePreferenceError>;
}

pub struct SavePreferenceUseCase<R>
where
    R: PreferenceRepository,
{
    repository: R,
}

impl<R> SavePreferenceUseCase<R>
where
    R: PreferenceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn check_range<T: PartialOrd>(
    min: &Option<T>,
    max: &Option<T>,
    name: &'static str,
) -> Result<(), SavePreferenceError> {
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(SavePreferenceError::InvalidRange(name));
        }
    }
    Ok(())
}

#[async_trait]
impl<R> ISavePreferenceUseCase for SavePreferenceUseCase<R>
where
    R: PreferenceRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        input: SavePreferenceInput,
    ) -> Result<Preference, SavePreferenceError> {
        check_range(&input.year_min, &input.year_max, "year")?;
        check_range(&input.price_min, &input.price_max, "price")?;
        check_range(&input.odometer_min, &input.odometer_max, "odometer")?;

        self.repository
            .upsert(Preference {
                user_id,
                year_min: input.year_min,
                year_max: input.year_max,
                price_min: input.price_min,
                price_max: input.price_max,
                odometer_min: input.odometer_min,
                odometer_max: input.odometer_max,
                fuel_type_ids: input.fuel_type_ids,
                transmission_type_ids: input.transmission_type_ids,
                model_ids: input.model_ids,
                brand_ids: input.brand_ids,
            })
            .await
            .map_err(|e| SavePreferenceError::RepositoryError(e.to_string()))
    }
}
