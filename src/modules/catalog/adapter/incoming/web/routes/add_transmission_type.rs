use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::add_brand::map_reference_data_error;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddTransmissionTypeRequest {
    /// Transmission type name
    #[schema(example = "Automatic")]
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct TransmissionTypeResponse {
    pub id: i32,
    pub name: String,
}

/// Add a transmission type
#[utoipa::path(
    post,
    path = "/api/catalog/transmission_types",
    tag = "catalog",
    request_body = AddTransmissionTypeRequest,
    responses(
        (status = 201, description = "Transmission type created", body = inline(SuccessResponse<TransmissionTypeResponse>)),
        (status = 400, description = "Empty name", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/catalog/transmission_types")]
pub async fn add_transmission_type_handler(
    req: web::Json<AddTransmissionTypeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .catalog_reference_use_case
        .add_transmission_type(&req.name)
        .await
    {
        Ok(transmission) => {
            info!(
                transmission_type_id = transmission.id,
                name = %transmission.name,
                "Transmission type created"
            );
            ApiResponse::created(TransmissionTypeResponse {
                id: transmission.id,
                name: transmission.name,
            })
        }

        Err(e) => map_reference_data_error(e),
    }
}
