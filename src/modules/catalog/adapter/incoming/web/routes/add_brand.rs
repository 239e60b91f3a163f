use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::application::domain::entities::CarBrand;
use crate::modules::catalog::application::use_cases::manage_reference_data::ReferenceDataError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddBrandRequest {
    /// Brand name
    #[schema(example = "Toyota")]
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct BrandResponse {
    pub id: i32,
    pub name: String,
}

pub(super) fn map_reference_data_error(err: ReferenceDataError) -> HttpResponse {
    match &err {
        ReferenceDataError::EmptyName => {
            warn!("Reference data with empty name rejected");
            ApiResponse::bad_request("EMPTY_NAME", "Name must not be empty")
        }

        ReferenceDataError::BrandNotFound => {
            warn!("Model creation under unknown brand");
            ApiResponse::not_found("BRAND_NOT_FOUND", "Brand not found")
        }

        other => {
            error!(error = %other, "Reference data operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Add a car brand
#[utoipa::path(
    post,
    path = "/api/catalog/brands",
    tag = "catalog",
    request_body = AddBrandRequest,
    responses(
        (status = 201, description = "Brand created", body = inline(SuccessResponse<BrandResponse>)),
        (status = 400, description = "Empty name", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/catalog/brands")]
pub async fn add_brand_handler(
    req: web::Json<AddBrandRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog_reference_use_case.add_brand(&req.name).await {
        Ok(brand) => {
            info!(brand_id = brand.id, name = %brand.name, "Brand created");
            ApiResponse::created(brand_body(brand))
        }

        Err(e) => map_reference_data_error(e),
    }
}

fn brand_body(brand: CarBrand) -> BrandResponse {
    BrandResponse {
        id: brand.id,
        name: brand.name,
    }
}
