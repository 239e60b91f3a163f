use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::activate_account::ActivateAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ActivateAccountResponse {
    /// Confirmation message
    #[schema(example = "Account activated")]
    message: String,

    /// Session access token (JWT)
    access_token: String,

    /// Session refresh token (JWT)
    refresh_token: String,

    user: ActivatedUserBody,
}

#[derive(Serialize, ToSchema)]
pub struct ActivatedUserBody {
    id: String,
    email: String,
    first_name: String,
    last_name: String,
}

fn map_activate_error(err: ActivateAccountError) -> HttpResponse {
    match &err {
        // One code for every failure mode; the link holder learns nothing
        // about which check tripped.
        ActivateAccountError::InvalidToken => {
            warn!("Activation link rejected");
            ApiResponse::gone("INVALID_TOKEN", "Activation link is invalid or has expired")
        }

        other => {
            error!(error = %other, "Account activation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Activate an account from an emailed link
///
/// Confirms the email address, marks the account active and logs the user in.
/// Each link works at most once.
#[utoipa::path(
    get,
    path = "/activate/{uid_b64}/{token}",
    tag = "auth",
    params(
        ("uid_b64" = String, Path, description = "Base64-encoded user id"),
        ("token" = String, Path, description = "Activation token"),
    ),
    responses(
        (
            status = 200,
            description = "Account activated and logged in",
            body = inline(SuccessResponse<ActivateAccountResponse>)
        ),
        (
            status = 410,
            description = "Invalid, expired or already-used link",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_TOKEN",
                    "message": "Activation link is invalid or has expired"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/activate/{uid_b64}/{token}")]
pub async fn activate_account_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (uid_b64, token) = path.into_inner();

    info!("Account activation attempt");

    match data
        .activate_account_use_case
        .execute(&uid_b64, &token)
        .await
    {
        Ok(output) => {
            info!(user_id = %output.user.id, "Account activated");

            ApiResponse::success(ActivateAccountResponse {
                message: "Account activated".to_string(),
                access_token: output.access_token,
                refresh_token: output.refresh_token,
                user: ActivatedUserBody {
                    id: output.user.id.to_string(),
                    email: output.user.email,
                    first_name: output.user.first_name,
                    last_name: output.user.last_name,
                },
            })
        }

        Err(e) => map_activate_error(e),
    }
}
