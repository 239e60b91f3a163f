use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::preferences::application::domain::entities::Preference;
use crate::modules::preferences::application::ports::outgoing::{
    PreferenceRepository, PreferenceRepositoryError,
};

use super::sea_orm_entity::preferences::{self, IdList};

#[derive(Clone, Debug)]
pub struct PreferenceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PreferenceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_preference(model: preferences::Model) -> Preference {
        Preference {
            user_id: model.user_id,
            year_min: model.year_min,
            year_max: model.year_max,
            price_min: model.price_min,
            price_max: model.price_max,
            odometer_min: model.odometer_min,
            odometer_max: model.odometer_max,
            fuel_type_ids: model.fuel_type_ids.0,
            transmission_type_ids: model.transmission_type_ids.0,
            model_ids: model.model_ids.0,
            brand_ids: model.brand_ids.0,
        }
    }
}

#[async_trait]
impl PreferenceRepository for PreferenceRepositoryPostgres {
    async fn upsert(
        &self,
        preference: Preference,
    ) -> Result<Preference, PreferenceRepositoryError> {
        let active = preferences::ActiveModel {
            user_id: Set(preference.user_id),
            year_min: Set(preference.year_min),
            year_max: Set(preference.year_max),
            price_min: Set(preference.price_min),
            price_max: Set(preference.price_max),
            odometer_min: Set(preference.odometer_min),
            odometer_max: Set(preference.odometer_max),
            fuel_type_ids: Set(IdList(preference.fuel_type_ids.clone())),
            transmission_type_ids: Set(IdList(preference.transmission_type_ids.clone())),
            model_ids: Set(IdList(preference.model_ids.clone())),
            brand_ids: Set(IdList(preference.brand_ids.clone())),
        };

        preferences::Entity::insert(active)
            .on_conflict(
                OnConflict::column(preferences::Column::UserId)
                    .update_columns([
                        preferences::Column::YearMin,
                        preferences::Column::YearMax,
                        preferences::Column::PriceMin,
                        preferences::Column::PriceMax,
                        preferences::Column::OdometerMin,
                        preferences::Column::OdometerMax,
                        preferences::Column::FuelTypeIds,
                        preferences::Column::TransmissionTypeIds,
                        preferences::Column::ModelIds,
                        preferences::Column::BrandIds,
                    ])
                    .to_owned(),
            )
            .exec(&*self.db)
            .await
            .map_err(|e| PreferenceRepositoryError::DatabaseError(e.to_string()))?;

        Ok(preference)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Preference>, PreferenceRepositoryError> {
        let found = preferences::Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| PreferenceRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.map(Self::map_to_preference))
    }
}
