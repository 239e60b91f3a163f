use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::reputation::application::domain::entities::RatingRole;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct AverageRatingResponse {
    pub user_id: String,
    /// SELLER or BUYER
    pub role: String,
    /// Mean score, or null when the user has no ratings in that role
    #[schema(example = 4.5)]
    pub average: Option<f64>,
}

/// Fetch a user's average rating in a role
///
/// An unrated user has no average; the field is null, never zero.
#[utoipa::path(
    get,
    path = "/api/users/{id}/rating/{role}",
    tag = "reputation",
    params(
        ("id" = Uuid, Path, description = "User id"),
        ("role" = String, Path, description = "seller or buyer"),
    ),
    responses(
        (status = 200, description = "Average computed", body = inline(SuccessResponse<AverageRatingResponse>)),
        (
            status = 400,
            description = "Unknown role segment",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_ROLE", "message": "Role must be seller or buyer" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/{id}/rating/{role}")]
pub async fn get_rating_handler(
    path: web::Path<(Uuid, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (user_id, role_segment) = path.into_inner();

    let role = match RatingRole::parse(&role_segment.to_uppercase()) {
        Some(role) => role,
        None => {
            warn!(user_id = %user_id, role = %role_segment, "Unknown rating role");
            return ApiResponse::bad_request("INVALID_ROLE", "Role must be seller or buyer");
        }
    };

    match data.average_rating_use_case.execute(user_id, role).await {
        Ok(average) => ApiResponse::success(AverageRatingResponse {
            user_id: user_id.to_string(),
            role: role.as_str().to_string(),
            average,
        }),

        Err(e) => {
            error!(user_id = %user_id, error = %e, "Average rating fetch failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::reputation::application::use_cases::average_rating::{
        AverageRatingError, IAverageRatingUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockAverage(Option<f64>);

    #[async_trait]
    impl IAverageRatingUseCase for MockAverage {
        async fn execute(
            &self,
            _: Uuid,
            _: RatingRole,
        ) -> Result<Option<f64>, AverageRatingError> {
            Ok(self.0)
        }
    }

    async fn call(path: &str, use_case: MockAverage) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_average_rating(use_case)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_rating_handler)).await;

        let req = test::TestRequest::get().uri(path).to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn average_is_returned_for_seller_role() {
        let path = format!("/api/users/{}/rating/seller", Uuid::new_v4());
        let (status, body) = call(&path, MockAverage(Some(4.5))).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["role"], "SELLER");
        assert_eq!(body["data"]["average"], 4.5);
    }

    #[actix_web::test]
    async fn unrated_user_has_null_average() {
        let path = format!("/api/users/{}/rating/buyer", Uuid::new_v4());
        let (status, body) = call(&path, MockAverage(None)).await;
        assert_eq!(status, 200);
        assert!(body["data"]["average"].is_null());
    }

    #[actix_web::test]
    async fn unknown_role_is_400() {
        let path = format!("/api/users/{}/rating/landlord", Uuid::new_v4());
        let (status, body) = call(&path, MockAverage(None)).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_ROLE");
    }
}
