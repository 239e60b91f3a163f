use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::application::domain::entities::CarListing;
use crate::modules::catalog::application::use_cases::create_listing::{
    CreateListingError, CreateListingInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateCarRequest {
    /// Selling user id
    pub owner_id: uuid::Uuid,

    /// Model year (4 digits, not in the future)
    #[schema(example = 2020)]
    pub year: i32,

    pub model_id: i32,
    pub fuel_type_id: i32,
    pub transmission_type_id: i32,

    /// Registration plate
    #[schema(example = "ABC123")]
    pub registration_no: String,

    /// Odometer reading in km
    #[schema(example = 45000)]
    pub odometer: i32,

    /// Asking price
    #[schema(example = 18500.0)]
    pub price: f64,

    /// One of EXCELLENT, GOOD, FAIR, POOR
    #[schema(example = "GOOD")]
    pub condition: String,

    /// Number of previous owners
    #[schema(example = 1)]
    pub prev_owner_count: i32,

    #[schema(example = "Sydney")]
    pub location: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, ToSchema)]
pub struct CarResponse {
    pub id: String,
    pub owner_id: String,
    pub year: i32,
    pub model_id: i32,
    pub fuel_type_id: i32,
    pub transmission_type_id: i32,
    pub registration_no: String,
    pub odometer: i32,
    pub price: f64,
    pub condition: String,
    pub status: String,
    pub prev_owner_count: i32,
    pub location: String,
    pub description: String,
}

pub(super) fn car_body(listing: CarListing) -> CarResponse {
    CarResponse {
        id: listing.id.to_string(),
        owner_id: listing.owner_id.to_string(),
        year: listing.year,
        model_id: listing.model_id,
        fuel_type_id: listing.fuel_type_id,
        transmission_type_id: listing.transmission_type_id,
        registration_no: listing.registration_no,
        odometer: listing.odometer,
        price: listing.price,
        condition: listing.condition.as_str().to_string(),
        status: listing.status.as_str().to_string(),
        prev_owner_count: listing.prev_owner_count,
        location: listing.location,
        description: listing.description,
    }
}

fn map_create_listing_error(err: CreateListingError) -> HttpResponse {
    match &err {
        CreateListingError::InvalidYear
        | CreateListingError::InvalidPrice
        | CreateListingError::InvalidOdometer
        | CreateListingError::InvalidCondition => {
            warn!(error = %err, "Listing rejected by validation");
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        CreateListingError::ModelNotFound
        | CreateListingError::FuelTypeNotFound
        | CreateListingError::TransmissionTypeNotFound => {
            warn!(error = %err, "Listing references unknown catalog row");
            ApiResponse::not_found("REFERENCE_NOT_FOUND", &err.to_string())
        }

        other => {
            error!(error = %other, "Listing creation failed");
            ApiResponse::internal_error()
        }
    }
}

/// List a car for sale
///
/// New listings start in AVAILABLE status.
#[utoipa::path(
    post,
    path = "/api/catalog/cars",
    tag = "catalog",
    request_body = CreateCarRequest,
    responses(
        (status = 201, description = "Listing created", body = inline(SuccessResponse<CarResponse>)),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Year must be a 4-digit year no later than the current year"
                }
            })
        ),
        (status = 404, description = "Model, fuel type or transmission type not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/catalog/cars")]
pub async fn create_car_handler(
    req: web::Json<CreateCarRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    info!(owner_id = %req.owner_id, year = req.year, "Listing creation attempt");

    let input = CreateListingInput {
        owner_id: req.owner_id,
        year: req.year,
        model_id: req.model_id,
        fuel_type_id: req.fuel_type_id,
        transmission_type_id: req.transmission_type_id,
        registration_no: req.registration_no,
        odometer: req.odometer,
        price: req.price,
        condition: req.condition,
        prev_owner_count: req.prev_owner_count,
        location: req.location,
        description: req.description,
    };

    match data.create_listing_use_case.execute(input).await {
        Ok(listing) => {
            info!(car_id = %listing.id, "Listing created");
            ApiResponse::created(car_body(listing))
        }

        Err(e) => map_create_listing_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::domain::entities::{CarCondition, ListingStatus};
    use crate::modules::catalog::application::use_cases::create_listing::ICreateListingUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    struct MockCreateListing(fn(CreateListingInput) -> Result<CarListing, CreateListingError>);

    #[async_trait]
    impl ICreateListingUseCase for MockCreateListing {
        async fn execute(
            &self,
            input: CreateListingInput,
        ) -> Result<CarListing, CreateListingError> {
            (self.0)(input)
        }
    }

    fn request_body() -> CreateCarRequest {
        CreateCarRequest {
            owner_id: Uuid::new_v4(),
            year: 2020,
            model_id: 1,
            fuel_type_id: 1,
            transmission_type_id: 1,
            registration_no: "ABC123".to_string(),
            odometer: 45000,
            price: 18500.0,
            condition: "GOOD".to_string(),
            prev_owner_count: 1,
            location: "Sydney".to_string(),
            description: String::new(),
        }
    }

    async fn call(use_case: impl ICreateListingUseCase + 'static) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_listing(use_case)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(create_car_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/catalog/cars")
            .set_json(request_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn listing_created_returns_201_available() {
        let (status, body) = call(MockCreateListing(|input| {
            Ok(CarListing {
                id: Uuid::new_v4(),
                owner_id: input.owner_id,
                year: input.year,
                model_id: input.model_id,
                fuel_type_id: input.fuel_type_id,
                transmission_type_id: input.transmission_type_id,
                registration_no: input.registration_no,
                odometer: input.odometer,
                price: input.price,
                condition: CarCondition::Good,
                status: ListingStatus::Available,
                prev_owner_count: input.prev_owner_count,
                location: input.location,
                description: input.description,
                created_at: Utc::now(),
            })
        }))
        .await;
        assert_eq!(status, 201);
        assert_eq!(body["data"]["status"], "AVAILABLE");
        assert_eq!(body["data"]["condition"], "GOOD");
    }

    #[actix_web::test]
    async fn invalid_year_is_400() {
        let (status, body) =
            call(MockCreateListing(|_| Err(CreateListingError::InvalidYear))).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn unknown_model_is_404() {
        let (status, body) =
            call(MockCreateListing(|_| Err(CreateListingError::ModelNotFound))).await;
        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "REFERENCE_NOT_FOUND");
    }
}
