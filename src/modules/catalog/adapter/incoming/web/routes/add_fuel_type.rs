use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::add_brand::map_reference_data_error;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddFuelTypeRequest {
    /// Fuel type name
    #[schema(example = "Petrol")]
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct FuelTypeResponse {
    pub id: i32,
    pub name: String,
}

/// Add a fuel type
#[utoipa::path(
    post,
    path = "/api/catalog/fuel_types",
    tag = "catalog",
    request_body = AddFuelTypeRequest,
    responses(
        (status = 201, description = "Fuel type created", body = inline(SuccessResponse<FuelTypeResponse>)),
        (status = 400, description = "Empty name", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/catalog/fuel_types")]
pub async fn add_fuel_type_handler(
    req: web::Json<AddFuelTypeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .catalog_reference_use_case
        .add_fuel_type(&req.name)
        .await
    {
        Ok(fuel) => {
            info!(fuel_type_id = fuel.id, name = %fuel.name, "Fuel type created");
            ApiResponse::created(FuelTypeResponse {
                id: fuel.id,
                name: fuel.name,
            })
        }

        Err(e) => map_reference_data_error(e),
    }
}
