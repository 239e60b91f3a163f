use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::refresh_token::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    /// Refresh token issued at login or a previous refresh
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

fn map_refresh_error(err: RefreshTokenError) -> HttpResponse {
    match &err {
        RefreshTokenError::InvalidToken => {
            warn!("Refresh with expired, revoked or malformed token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired refresh token")
        }

        other => {
            error!(error = %other, "Token refresh failed");
            ApiResponse::internal_error()
        }
    }
}

/// Exchange a refresh token for a new token pair
///
/// Both tokens are rotated; the submitted refresh token should be discarded.
/// Tokens revoked by logout are rejected.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequest,
    responses(
        (
            status = 200,
            description = "New token pair issued",
            body = inline(SuccessResponse<RefreshTokenResponse>)
        ),
        (
            status = 401,
            description = "Expired, revoked or malformed refresh token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_TOKEN", "message": "Invalid or expired refresh token" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .refresh_token_use_case
        .execute(&req.refresh_token)
        .await
    {
        Ok(output) => {
            info!("Token pair rotated");
            ApiResponse::success(RefreshTokenResponse {
                access_token: output.access_token,
                refresh_token: output.refresh_token,
            })
        }

        Err(e) => map_refresh_error(e),
    }
}
