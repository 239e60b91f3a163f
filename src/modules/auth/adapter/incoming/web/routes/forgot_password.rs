use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::request_password_reset::RequestPasswordResetInput;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ForgotPasswordRequest {
    /// Email address of the account
    #[schema(example = "jane@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct ForgotPasswordResponse {
    #[schema(example = "If that email is registered, a reset link has been sent.")]
    message: String,
}

/// Request a password reset email
///
/// Answers identically whether or not the address belongs to an account, so
/// the endpoint cannot be used to enumerate registered emails.
#[utoipa::path(
    post,
    path = "/api/auth/forgot_password",
    tag = "auth",
    request_body = ForgotPasswordRequest,
    responses(
        (
            status = 200,
            description = "Reset email dispatched if the account exists",
            body = inline(SuccessResponse<ForgotPasswordResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "If that email is registered, a reset link has been sent."
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/forgot_password")]
pub async fn forgot_password_handler(
    req: web::Json<ForgotPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Password reset requested");

    let input = RequestPasswordResetInput {
        email: req.email.clone(),
    };

    match data.request_password_reset_use_case.execute(input).await {
        Ok(()) => ApiResponse::success(ForgotPasswordResponse {
            message: "If that email is registered, a reset link has been sent.".to_string(),
        }),

        Err(e) => {
            error!(error = %e, "Password reset request failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::use_cases::request_password_reset::{
        IRequestPasswordResetUseCase, RequestPasswordResetError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockResetRequestOk;

    #[async_trait]
    impl IRequestPasswordResetUseCase for MockResetRequestOk {
        async fn execute(
            &self,
            _: RequestPasswordResetInput,
        ) -> Result<(), RequestPasswordResetError> {
            Ok(())
        }
    }

    struct MockResetRequestSmtpDown;

    #[async_trait]
    impl IRequestPasswordResetUseCase for MockResetRequestSmtpDown {
        async fn execute(
            &self,
            _: RequestPasswordResetInput,
        ) -> Result<(), RequestPasswordResetError> {
            Err(RequestPasswordResetError::EmailSendingFailed)
        }
    }

    async fn call(
        use_case: impl IRequestPasswordResetUseCase + 'static,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_request_password_reset(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(forgot_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/forgot_password")
            .set_json(ForgotPasswordRequest {
                email: "jane@example.com".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn reset_request_always_answers_the_same_message() {
        let (status, body) = call(MockResetRequestOk).await;
        assert_eq!(status, 200);
        assert!(body["data"]["message"]
            .as_str()
            .unwrap()
            .starts_with("If that email is registered"));
    }

    #[actix_web::test]
    async fn smtp_failure_surfaces_as_500() {
        let (status, body) = call(MockResetRequestSmtpDown).await;
        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
