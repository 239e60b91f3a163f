use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LogoutRequest {
    /// Refresh token issued at login
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    #[schema(example = "Logged out")]
    message: String,
}

fn map_logout_error(err: LogoutError) -> HttpResponse {
    match &err {
        LogoutError::InvalidToken => {
            warn!("Logout with malformed refresh token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        other => {
            error!(error = %other, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}

/// Log out by revoking a refresh token
///
/// Blacklists the token for the remainder of its lifetime. Logging out with
/// an already-expired token succeeds; there is nothing left to revoke.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutRequest,
    responses(
        (
            status = 200,
            description = "Refresh token revoked",
            body = inline(SuccessResponse<LogoutResponse>)
        ),
        (
            status = 401,
            description = "Malformed or non-refresh token",
            body = ErrorResponse
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    req: web::Json<LogoutRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.logout_use_case.execute(&req.refresh_token).await {
        Ok(()) => {
            info!("Refresh token revoked");
            ApiResponse::success(LogoutResponse {
                message: "Logged out".to_string(),
            })
        }

        Err(e) => map_logout_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::use_cases::logout_user::ILogoutUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockLogoutOk;

    #[async_trait]
    impl ILogoutUseCase for MockLogoutOk {
        async fn execute(&self, _: &str) -> Result<(), LogoutError> {
            Ok(())
        }
    }

    struct MockLogoutInvalid;

    #[async_trait]
    impl ILogoutUseCase for MockLogoutInvalid {
        async fn execute(&self, _: &str) -> Result<(), LogoutError> {
            Err(LogoutError::InvalidToken)
        }
    }

    async fn call(use_case: impl ILogoutUseCase + 'static) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default().with_logout(use_case).build();

        let app =
            test::init_service(App::new().app_data(app_state).service(logout_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .set_json(LogoutRequest {
                refresh_token: "some-refresh-token".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn logout_success_returns_200() {
        let (status, body) = call(MockLogoutOk).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["message"], "Logged out");
    }

    #[actix_web::test]
    async fn malformed_token_is_401() {
        let (status, body) = call(MockLogoutInvalid).await;
        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }
}
