use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use super::save_preference::{preference_body, PreferenceResponse};

/// Fetch a user's saved search preference
#[utoipa::path(
    get,
    path = "/api/users/{id}/preference",
    tag = "preferences",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Preference found", body = inline(SuccessResponse<PreferenceResponse>)),
        (
            status = 404,
            description = "User has no saved preference",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PREFERENCE_NOT_FOUND", "message": "No preference saved" }
            })
        ),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Path user differs from the token's subject", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/{id}/preference")]
pub async fn get_preference_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    if user.user_id != user_id {
        warn!(user_id = %user_id, token_user = %user.user_id, "Preference read for another user");
        return ApiResponse::forbidden("FORBIDDEN", "Cannot read another user's preference");
    }

    match data.get_preference_use_case.execute(user_id).await {
        Ok(Some(preference)) => ApiResponse::success(preference_body(preference)),

        Ok(None) => {
            warn!(user_id = %user_id, "Preference not found");
            ApiResponse::not_found("PREFERENCE_NOT_FOUND", "No preference saved")
        }

        Err(e) => {
            error!(user_id = %user_id, error = %e, "Preference fetch failed");
            ApiResponse::internal_error()
        }
    }
}
