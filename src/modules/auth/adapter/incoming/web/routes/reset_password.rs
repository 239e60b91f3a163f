use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::reset_password::{
    ResetPasswordError, ResetPasswordInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    /// New password
    #[schema(example = "NewSecurePass456!")]
    pub password1: String,

    /// New password confirmation
    #[schema(example = "NewSecurePass456!")]
    pub password2: String,
}

#[derive(Serialize, ToSchema)]
pub struct ResetPasswordResponse {
    #[schema(example = "Password updated. You can now log in with your new password.")]
    message: String,
}

fn map_reset_error(err: ResetPasswordError) -> HttpResponse {
    match &err {
        ResetPasswordError::InvalidToken => {
            warn!("Password reset link rejected");
            ApiResponse::gone("INVALID_TOKEN", "Reset link is invalid or has expired")
        }

        ResetPasswordError::PasswordMismatch => {
            warn!("Password reset with mismatched passwords");
            ApiResponse::bad_request("PASSWORD_MISMATCH", "Passwords do not match")
        }

        ResetPasswordError::SameAsOldPassword => {
            warn!("Password reset reusing the current password");
            ApiResponse::bad_request(
                "SAME_AS_OLD_PASSWORD",
                "New password must differ from the current one",
            )
        }

        other => {
            error!(error = %other, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}

/// Set a new password from an emailed reset link
///
/// The link is single-use: a successful reset bumps the account's security
/// stamp, which invalidates the token that was just used.
#[utoipa::path(
    post,
    path = "/reset_password/{uid_b64}/{token}",
    tag = "auth",
    params(
        ("uid_b64" = String, Path, description = "Base64-encoded user id"),
        ("token" = String, Path, description = "Password reset token"),
    ),
    request_body = ResetPasswordRequest,
    responses(
        (
            status = 200,
            description = "Password updated",
            body = inline(SuccessResponse<ResetPasswordResponse>)
        ),
        (
            status = 400,
            description = "Password pair rejected",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PASSWORD_MISMATCH", "message": "Passwords do not match" }
            })
        ),
        (
            status = 410,
            description = "Invalid, expired or already-used link",
            body = ErrorResponse
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/reset_password/{uid_b64}/{token}")]
pub async fn reset_password_handler(
    path: web::Path<(String, String)>,
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (uid_b64, token) = path.into_inner();

    info!("Password reset attempt");

    let input = ResetPasswordInput {
        uid: uid_b64,
        token,
        password1: req.password1.clone(),
        password2: req.password2.clone(),
    };

    match data.reset_password_use_case.execute(input).await {
        Ok(()) => {
            info!("Password reset succeeded");
            ApiResponse::success(ResetPasswordResponse {
                message: "Password updated. You can now log in with your new password."
                    .to_string(),
            })
        }

        Err(e) => map_reset_error(e),
    }
}
