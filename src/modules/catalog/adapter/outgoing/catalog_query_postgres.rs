use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{
    CarBrand, CarListing, CarModel, FuelType, TransmissionType,
};
use crate::modules::catalog::application::ports::outgoing::{CatalogQuery, CatalogQueryError};

use super::catalog_repository_postgres::map_to_listing;
use super::sea_orm_entity::{car_brands, car_listings, car_models, fuel_types, transmission_types};

#[derive(Clone, Debug)]
pub struct CatalogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CatalogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogQuery for CatalogQueryPostgres {
    async fn find_brand(&self, id: i32) -> Result<Option<CarBrand>, CatalogQueryError> {
        let found = car_brands::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CatalogQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(|m| CarBrand {
            id: m.id,
            name: m.name,
        }))
    }

    async fn find_model(&self, id: i32) -> Result<Option<CarModel>, CatalogQueryError> {
        let found = car_models::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CatalogQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(|m| CarModel {
            id: m.id,
            brand_id: m.brand_id,
            name: m.name,
        }))
    }

    async fn find_fuel_type(&self, id: i32) -> Result<Option<FuelType>, CatalogQueryError> {
        let found = fuel_types::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CatalogQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(|m| FuelType {
            id: m.id,
            name: m.name,
        }))
    }

    async fn find_transmission_type(
        &self,
        id: i32,
    ) -> Result<Option<TransmissionType>, CatalogQueryError> {
        let found = transmission_types::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CatalogQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(|m| TransmissionType {
            id: m.id,
            name: m.name,
        }))
    }

    async fn find_listing(&self, id: Uuid) -> Result<Option<CarListing>, CatalogQueryError> {
        let found = car_listings::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CatalogQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(map_to_listing))
    }
}
