use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::add_brand::map_reference_data_error;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddModelRequest {
    /// Owning brand id
    #[schema(example = 1)]
    pub brand_id: i32,

    /// Model name
    #[schema(example = "Corolla")]
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct ModelResponse {
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
}

/// Add a car model under an existing brand
#[utoipa::path(
    post,
    path = "/api/catalog/models",
    tag = "catalog",
    request_body = AddModelRequest,
    responses(
        (status = 201, description = "Model created", body = inline(SuccessResponse<ModelResponse>)),
        (status = 400, description = "Empty name", body = ErrorResponse),
        (status = 404, description = "Brand not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/catalog/models")]
pub async fn add_model_handler(
    req: web::Json<AddModelRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .catalog_reference_use_case
        .add_model(req.brand_id, &req.name)
        .await
    {
        Ok(model) => {
            info!(model_id = model.id, brand_id = model.brand_id, name = %model.name, "Model created");
            ApiResponse::created(ModelResponse {
                id: model.id,
                brand_id: model.brand_id,
                name: model.name,
            })
        }

        Err(e) => map_reference_data_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::domain::entities::{
        CarBrand, CarModel, FuelType, TransmissionType,
    };
    use crate::modules::catalog::application::use_cases::manage_reference_data::{
        ICatalogReferenceUseCase, ReferenceDataError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockReference(fn(i32, &str) -> Result<CarModel, ReferenceDataError>);

    #[async_trait]
    impl ICatalogReferenceUseCase for MockReference {
        async fn add_brand(&self, _: &str) -> Result<CarBrand, ReferenceDataError> {
            unreachable!()
        }

        async fn add_model(
            &self,
            brand_id: i32,
            name: &str,
        ) -> Result<CarModel, ReferenceDataError> {
            (self.0)(brand_id, name)
        }

        async fn add_fuel_type(&self, _: &str) -> Result<FuelType, ReferenceDataError> {
            unreachable!()
        }

        async fn add_transmission_type(
            &self,
            _: &str,
        ) -> Result<TransmissionType, ReferenceDataError> {
            unreachable!()
        }
    }

    async fn call(use_case: impl ICatalogReferenceUseCase + 'static) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_catalog_reference(use_case)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(add_model_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/catalog/models")
            .set_json(AddModelRequest {
                brand_id: 1,
                name: "Corolla".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn model_created_returns_201() {
        let (status, body) = call(MockReference(|brand_id, name| {
            Ok(CarModel {
                id: 10,
                brand_id,
                name: name.to_string(),
            })
        }))
        .await;
        assert_eq!(status, 201);
        assert_eq!(body["data"]["brand_id"], 1);
        assert_eq!(body["data"]["name"], "Corolla");
    }

    #[actix_web::test]
    async fn unknown_brand_is_404() {
        let (status, body) =
            call(MockReference(|_, _| Err(ReferenceDataError::BrandNotFound))).await;
        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "BRAND_NOT_FOUND");
    }
}
