use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, NotSet, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{
    CarBrand, CarListing, CarModel, FuelType, ListingStatus, TransmissionType,
};
use crate::modules::catalog::application::ports::outgoing::{
    CatalogRepository, CatalogRepositoryError, NewListing,
};

use super::sea_orm_entity::{car_brands, car_listings, car_models, fuel_types, transmission_types};

#[derive(Clone, Debug)]
pub struct CatalogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CatalogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_error(e: sea_orm::DbErr) -> CatalogRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23503") || err_str.contains("foreign key") {
            return CatalogRepositoryError::ForeignKeyViolation;
        }
        CatalogRepositoryError::DatabaseError(e.to_string())
    }
}

pub(super) fn map_to_listing(model: car_listings::Model) -> CarListing {
    // condition/status are written through as_str(), so parse cannot fail for
    // rows this crate inserted; unknown values degrade to safe defaults.
    use crate::modules::catalog::application::domain::entities::CarCondition;
    CarListing {
        id: model.id,
        owner_id: model.owner_id,
        year: model.year,
        model_id: model.model_id,
        fuel_type_id: model.fuel_type_id,
        transmission_type_id: model.transmission_type_id,
        registration_no: model.registration_no,
        odometer: model.odometer,
        price: model.price,
        condition: CarCondition::parse(&model.condition).unwrap_or(CarCondition::Fair),
        status: ListingStatus::parse(&model.status).unwrap_or(ListingStatus::Unavailable),
        prev_owner_count: model.prev_owner_count,
        location: model.location,
        description: model.description,
        created_at: model.created_at.with_timezone(&chrono::Utc),
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn add_brand(&self, name: String) -> Result<CarBrand, CatalogRepositoryError> {
        let inserted = car_brands::ActiveModel {
            id: NotSet,
            name: Set(name),
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_error)?;

        Ok(CarBrand {
            id: inserted.id,
            name: inserted.name,
        })
    }

    async fn add_model(
        &self,
        brand_id: i32,
        name: String,
    ) -> Result<CarModel, CatalogRepositoryError> {
        let inserted = car_models::ActiveModel {
            id: NotSet,
            brand_id: Set(brand_id),
            name: Set(name),
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_error)?;

        Ok(CarModel {
            id: inserted.id,
            brand_id: inserted.brand_id,
            name: inserted.name,
        })
    }

    async fn add_fuel_type(&self, name: String) -> Result<FuelType, CatalogRepositoryError> {
        let inserted = fuel_types::ActiveModel {
            id: NotSet,
            name: Set(name),
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_error)?;

        Ok(FuelType {
            id: inserted.id,
            name: inserted.name,
        })
    }

    async fn add_transmission_type(
        &self,
        name: String,
    ) -> Result<TransmissionType, CatalogRepositoryError> {
        let inserted = transmission_types::ActiveModel {
            id: NotSet,
            name: Set(name),
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_error)?;

        Ok(TransmissionType {
            id: inserted.id,
            name: inserted.name,
        })
    }

    async fn create_listing(
        &self,
        listing: NewListing,
    ) -> Result<CarListing, CatalogRepositoryError> {
        let inserted = car_listings::ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(listing.owner_id),
            year: Set(listing.year),
            model_id: Set(listing.model_id),
            fuel_type_id: Set(listing.fuel_type_id),
            transmission_type_id: Set(listing.transmission_type_id),
            registration_no: Set(listing.registration_no),
            odometer: Set(listing.odometer),
            price: Set(listing.price),
            condition: Set(listing.condition.as_str().to_string()),
            status: Set(ListingStatus::Available.as_str().to_string()),
            prev_owner_count: Set(listing.prev_owner_count),
            location: Set(listing.location),
            description: Set(listing.description),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_error)?;

        Ok(map_to_listing(inserted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::domain::entities::CarCondition;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn new_listing() -> NewListing {
        NewListing {
            owner_id: Uuid::new_v4(),
            year: 2020,
            model_id: 1,
            fuel_type_id: 1,
            transmission_type_id: 1,
            registration_no: "ABC123".to_string(),
            odometer: 45000,
            price: 18500.0,
            condition: CarCondition::Good,
            prev_owner_count: 1,
            location: "Sydney".to_string(),
            description: "Well maintained".to_string(),
        }
    }

    #[tokio::test]
    async fn add_brand_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![car_brands::Model {
                id: 7,
                name: "Toyota".to_string(),
            }]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 7,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = CatalogRepositoryPostgres::new(Arc::new(db));

        let brand = repository.add_brand("Toyota".to_string()).await.unwrap();
        assert_eq!(brand.id, 7);
        assert_eq!(brand.name, "Toyota");
    }

    #[tokio::test]
    async fn add_model_with_unknown_brand_maps_to_fk_violation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "insert or update on table violates foreign key constraint".to_string(),
            )])
            .into_connection();

        let repository = CatalogRepositoryPostgres::new(Arc::new(db));

        let result = repository.add_model(99, "Corolla".to_string()).await;
        assert!(matches!(
            result,
            Err(CatalogRepositoryError::ForeignKeyViolation)
        ));
    }

    #[tokio::test]
    async fn create_listing_starts_available() {
        let listing = new_listing();
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![car_listings::Model {
                id,
                owner_id: listing.owner_id,
                year: listing.year,
                model_id: listing.model_id,
                fuel_type_id: listing.fuel_type_id,
                transmission_type_id: listing.transmission_type_id,
                registration_no: listing.registration_no.clone(),
                odometer: listing.odometer,
                price: listing.price,
                condition: "GOOD".to_string(),
                status: "AVAILABLE".to_string(),
                prev_owner_count: listing.prev_owner_count,
                location: listing.location.clone(),
                description: listing.description.clone(),
                created_at: Utc::now().into(),
            }]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = CatalogRepositoryPostgres::new(Arc::new(db));

        let created = repository.create_listing(listing).await.unwrap();
        assert_eq!(created.id, id);
        assert_eq!(created.status, ListingStatus::Available);
        assert_eq!(created.condition, CarCondition::Good);
    }
}
