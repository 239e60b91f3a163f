use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::reputation::application::domain::entities::RatingRole;
use crate::modules::reputation::application::use_cases::rate_user::{
    RateUserError, RateUserInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Shared body for both rating endpoints; the path decides the role and the
/// bearer token decides the rater.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RateUserRequest {
    /// Score, 1 to 5
    #[schema(example = 4)]
    pub rating: i16,

    /// Optional free-text comment
    #[schema(example = "Smooth transaction")]
    pub comments: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RatingResponse {
    pub id: String,
    pub ratee_id: String,
    /// SELLER or BUYER
    pub role: String,
    pub rating: i16,
    pub comments: Option<String>,
}

fn map_rate_user_error(err: RateUserError, ratee_id: Uuid) -> HttpResponse {
    match &err {
        RateUserError::InvalidScore => {
            warn!(ratee_id = %ratee_id, "Rating with out-of-range score");
            ApiResponse::bad_request("INVALID_SCORE", "Score must be between 1 and 5")
        }

        // Self-rating and unknown targets collapse into one code; the reason
        // stays in the logs.
        RateUserError::SelfRating | RateUserError::UserNotFound => {
            warn!(ratee_id = %ratee_id, error = %err, "Rating rejected");
            ApiResponse::bad_request("REQUEST_REJECTED", "Rating request rejected")
        }

        other => {
            error!(ratee_id = %ratee_id, error = %other, "Rating failed");
            ApiResponse::internal_error()
        }
    }
}

async fn rate(
    ratee_id: Uuid,
    role: RatingRole,
    rater_id: Uuid,
    req: RateUserRequest,
    data: web::Data<AppState>,
) -> HttpResponse {
    let input = RateUserInput {
        rater_id,
        ratee_id,
        role,
        score: req.rating,
        comment: req.comments,
    };

    match data.rate_user_use_case.execute(input).await {
        Ok(rating) => {
            info!(rating_id = %rating.id, ratee_id = %ratee_id, role = rating.role.as_str(), "Rating recorded");
            ApiResponse::created(RatingResponse {
                id: rating.id.to_string(),
                ratee_id: rating.ratee_id.to_string(),
                role: rating.role.as_str().to_string(),
                rating: rating.score,
                comments: rating.comment,
            })
        }

        Err(e) => map_rate_user_error(e, ratee_id),
    }
}

/// Rate a user as a seller
#[utoipa::path(
    post,
    path = "/api/users/{id}/rate_seller",
    tag = "reputation",
    params(("id" = Uuid, Path, description = "User being rated")),
    request_body = RateUserRequest,
    responses(
        (status = 201, description = "Rating recorded", body = inline(SuccessResponse<RatingResponse>)),
        (
            status = 400,
            description = "Invalid score, self-rating or unknown user",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "REQUEST_REJECTED", "message": "Rating request rejected" }
            })
        ),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/{id}/rate_seller")]
pub async fn rate_seller_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<RateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    rate(
        path.into_inner(),
        RatingRole::Seller,
        user.user_id,
        req.into_inner(),
        data,
    )
    .await
}

/// Rate a user as a buyer
#[utoipa::path(
    post,
    path = "/api/users/{id}/rate_buyer",
    tag = "reputation",
    params(("id" = Uuid, Path, description = "User being rated")),
    request_body = RateUserRequest,
    responses(
        (status = 201, description = "Rating recorded", body = inline(SuccessResponse<RatingResponse>)),
        (status = 400, description = "Invalid score, self-rating or unknown user", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/{id}/rate_buyer")]
pub async fn rate_buyer_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<RateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    rate(
        path.into_inner(),
        RatingRole::Buyer,
        user.user_id,
        req.into_inner(),
        data,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::reputation::application::domain::entities::Rating;
    use crate::modules::reputation::application::use_cases::rate_user::IRateUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header_for, session_token_data};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    struct MockRateUser(fn(RateUserInput) -> Result<Rating, RateUserError>);

    #[async_trait]
    impl IRateUserUseCase for MockRateUser {
        async fn execute(&self, input: RateUserInput) -> Result<Rating, RateUserError> {
            (self.0)(input)
        }
    }

    async fn call_as(
        rater_id: Uuid,
        path: &str,
        use_case: impl IRateUserUseCase + 'static,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_rate_user(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_token_data())
                .service(rate_seller_handler)
                .service(rate_buyer_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(path)
            .insert_header(bearer_header_for(rater_id))
            .set_json(RateUserRequest {
                rating: 4,
                comments: Some("Smooth transaction".to_string()),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    async fn call(
        path: &str,
        use_case: impl IRateUserUseCase + 'static,
    ) -> (u16, serde_json::Value) {
        call_as(Uuid::new_v4(), path, use_case).await
    }

    fn echo_rating(input: RateUserInput) -> Result<Rating, RateUserError> {
        Ok(Rating {
            id: Uuid::new_v4(),
            rater_id: input.rater_id,
            ratee_id: input.ratee_id,
            role: input.role,
            score: input.score,
            comment: input.comment,
            created_at: Utc::now(),
        })
    }

    #[actix_web::test]
    async fn seller_path_records_seller_role() {
        let path = format!("/api/users/{}/rate_seller", Uuid::new_v4());
        let (status, body) = call(&path, MockRateUser(echo_rating)).await;
        assert_eq!(status, 201);
        assert_eq!(body["data"]["role"], "SELLER");
        assert_eq!(body["data"]["rating"], 4);
    }

    /// Rejects any rater id that is not the token's subject.
    struct ExpectRater(Uuid);

    #[async_trait]
    impl IRateUserUseCase for ExpectRater {
        async fn execute(&self, input: RateUserInput) -> Result<Rating, RateUserError> {
            assert_eq!(input.rater_id, self.0);
            echo_rating(input)
        }
    }

    #[actix_web::test]
    async fn rater_comes_from_the_bearer_token() {
        let rater = Uuid::new_v4();
        let path = format!("/api/users/{}/rate_seller", Uuid::new_v4());
        let (status, _) = call_as(rater, &path, ExpectRater(rater)).await;
        assert_eq!(status, 201);
    }

    #[actix_web::test]
    async fn missing_bearer_token_is_401() {
        let app_state = TestAppStateBuilder::default()
            .with_rate_user(MockRateUser(echo_rating))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_token_data())
                .service(rate_seller_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/users/{}/rate_seller", Uuid::new_v4()))
            .set_json(RateUserRequest {
                rating: 4,
                comments: None,
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401);
    }

    #[actix_web::test]
    async fn buyer_path_records_buyer_role() {
        let path = format!("/api/users/{}/rate_buyer", Uuid::new_v4());
        let (status, body) = call(&path, MockRateUser(echo_rating)).await;
        assert_eq!(status, 201);
        assert_eq!(body["data"]["role"], "BUYER");
    }

    #[actix_web::test]
    async fn self_rating_and_unknown_user_share_one_code() {
        let path = format!("/api/users/{}/rate_seller", Uuid::new_v4());
        let (status_a, body_a) = call(&path, MockRateUser(|_| Err(RateUserError::SelfRating))).await;
        let (status_b, body_b) =
            call(&path, MockRateUser(|_| Err(RateUserError::UserNotFound))).await;
        assert_eq!(status_a, 400);
        assert_eq!(status_b, 400);
        assert_eq!(body_a["error"], body_b["error"]);
    }

    #[actix_web::test]
    async fn out_of_range_score_is_named() {
        let path = format!("/api/users/{}/rate_buyer", Uuid::new_v4());
        let (status, body) = call(&path, MockRateUser(|_| Err(RateUserError::InvalidScore))).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_SCORE");
    }
}
