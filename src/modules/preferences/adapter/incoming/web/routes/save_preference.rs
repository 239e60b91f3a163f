use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::preferences::application::domain::entities::Preference;
use crate::modules::preferences::application::use_cases::save_preference::{
    SavePreferenceError, SavePreferenceInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct SavePreferenceRequest {
    /// Earliest acceptable model year
    #[schema(example = 2015)]
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub odometer_min: Option<i32>,
    pub odometer_max: Option<i32>,
    #[serde(default)]
    pub fuel_type_ids: Vec<i32>,
    #[serde(default)]
    pub transmission_type_ids: Vec<i32>,
    #[serde(default)]
    pub model_ids: Vec<i32>,
    #[serde(default)]
    pub brand_ids: Vec<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct PreferenceResponse {
    pub user_id: String,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub odometer_min: Option<i32>,
    pub odometer_max: Option<i32>,
    pub fuel_type_ids: Vec<i32>,
    pub transmission_type_ids: Vec<i32>,
    pub model_ids: Vec<i32>,
    pub brand_ids: Vec<i32>,
}

pub(super) fn preference_body(preference: Preference) -> PreferenceResponse {
    PreferenceResponse {
        user_id: preference.user_id.to_string(),
        year_min: preference.year_min,
        year_max: preference.year_max,
        price_min: preference.price_min,
        price_max: preference.price_max,
        odometer_min: preference.odometer_min,
        odometer_max: preference.odometer_max,
        fuel_type_ids: preference.fuel_type_ids,
        transmission_type_ids: preference.transmission_type_ids,
        model_ids: preference.model_ids,
        brand_ids: preference.brand_ids,
    }
}

fn map_save_preference_error(err: SavePreferenceError, user_id: Uuid) -> HttpResponse {
    match &err {
        SavePreferenceError::InvalidRange(field) => {
            warn!(user_id = %user_id, field = field, "Preference range rejected");
            ApiResponse::bad_request("INVALID_RANGE", &err.to_string())
        }

        other => {
            error!(user_id = %user_id, error = %other, "Preference save failed");
            ApiResponse::internal_error()
        }
    }
}

/// Save a user's search preference
///
/// Replaces the whole preference row; the body is the desired end state.
#[utoipa::path(
    put,
    path = "/api/users/{id}/preference",
    tag = "preferences",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = SavePreferenceRequest,
    responses(
        (status = 200, description = "Preference saved", body = inline(SuccessResponse<PreferenceResponse>)),
        (
            status = 400,
            description = "A provided range has min > max",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_RANGE", "message": "Range minimum exceeds maximum: year" }
            })
        ),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Path user differs from the token's subject", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/{id}/preference")]
pub async fn save_preference_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SavePreferenceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    if user.user_id != user_id {
        warn!(user_id = %user_id, token_user = %user.user_id, "Preference write for another user");
        return ApiResponse::forbidden("FORBIDDEN", "Cannot modify another user's preference");
    }
    let req = req.into_inner();

    let input = SavePreferenceInput {
        year_min: req.year_min,
        year_max: req.year_max,
        price_min: req.price_min,
        price_max: req.price_max,
        odometer_min: req.odometer_min,
        odometer_max: req.odometer_max,
        fuel_type_ids: req.fuel_type_ids,
        transmission_type_ids: req.transmission_type_ids,
        model_ids: req.model_ids,
        brand_ids: req.brand_ids,
    };

    match data.save_preference_use_case.execute(user_id, input).await {
        Ok(preference) => {
            info!(user_id = %user_id, "Preference saved");
            ApiResponse::success(preference_body(preference))
        }

        Err(e) => map_save_preference_error(e, user_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::preferences::application::use_cases::save_preference::ISavePreferenceUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header_for, session_token_data};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockSavePreference(
        fn(Uuid, SavePreferenceInput) -> Result<Preference, SavePreferenceError>,
    );

    #[async_trait]
    impl ISavePreferenceUseCase for MockSavePreference {
        async fn execute(
            &self,
            user_id: Uuid,
            input: SavePreferenceInput,
        ) -> Result<Preference, SavePreferenceError> {
            (self.0)(user_id, input)
        }
    }

    async fn call(
        body: serde_json::Value,
        use_case: impl ISavePreferenceUseCase + 'static,
    ) -> (u16, serde_json::Value) {
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_save_preference(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_token_data())
                .service(save_preference_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{user_id}/preference"))
            .insert_header(bearer_header_for(user_id))
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn writing_another_users_preference_is_403() {
        let app_state = TestAppStateBuilder::default()
            .with_save_preference(MockSavePreference(|user_id, _| Ok(Preference::empty(user_id))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_token_data())
                .service(save_preference_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}/preference", Uuid::new_v4()))
            .insert_header(bearer_header_for(Uuid::new_v4()))
            .set_json(serde_json::json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 403);
    }

    #[actix_web::test]
    async fn missing_bearer_token_is_401() {
        let app_state = TestAppStateBuilder::default()
            .with_save_preference(MockSavePreference(|user_id, _| Ok(Preference::empty(user_id))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_token_data())
                .service(save_preference_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}/preference", Uuid::new_v4()))
            .set_json(serde_json::json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401);
    }

    #[actix_web::test]
    async fn saved_preference_is_echoed() {
        let (status, body) = call(
            serde_json::json!({ "year_min": 2015, "brand_ids": [1, 4] }),
            MockSavePreference(|user_id, input| {
                let mut preference = Preference::empty(user_id);
                preference.year_min = input.year_min;
                preference.brand_ids = input.brand_ids;
                Ok(preference)
            }),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["year_min"], 2015);
        assert_eq!(body["data"]["brand_ids"], serde_json::json!([1, 4]));
    }

    #[actix_web::test]
    async fn inverted_range_is_400() {
        let (status, body) = call(
            serde_json::json!({ "year_min": 2022, "year_max": 2015 }),
            MockSavePreference(|_, _| Err(SavePreferenceError::InvalidRange("year"))),
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_RANGE");
        assert!(body["error"]["message"].as_str().unwrap().contains("year"));
    }
}
