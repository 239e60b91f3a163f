use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::application::use_cases::get_listing::GetListingError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::create_car::{car_body, CarResponse};

#[derive(Deserialize, ToSchema)]
pub struct CarPath {
    pub id: Uuid,
}

/// Fetch a single car listing
#[utoipa::path(
    get,
    path = "/api/catalog/cars/{id}",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Car listing id")),
    responses(
        (status = 200, description = "Listing found", body = inline(SuccessResponse<CarResponse>)),
        (
            status = 404,
            description = "No listing with that id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "CAR_NOT_FOUND", "message": "Listing not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/catalog/cars/{id}")]
pub async fn get_car_handler(
    path: web::Path<CarPath>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_listing_use_case.execute(path.id).await {
        Ok(listing) => ApiResponse::success(car_body(listing)),

        Err(GetListingError::NotFound) => {
            warn!(car_id = %path.id, "Listing not found");
            ApiResponse::not_found("CAR_NOT_FOUND", "Listing not found")
        }

        Err(e) => {
            error!(car_id = %path.id, error = %e, "Listing fetch failed");
            ApiResponse::internal_error()
        }
    }
}
