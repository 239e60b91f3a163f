use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::preferences::application::use_cases::wishlist::WishlistError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct WishlistResponse {
    pub user_id: String,
    /// Wished car listing ids
    pub car_ids: Vec<String>,
}

fn owner_guard(user: &AuthenticatedUser, user_id: Uuid) -> Option<HttpResponse> {
    if user.user_id != user_id {
        warn!(user_id = %user_id, token_user = %user.user_id, "Wishlist access for another user");
        return Some(ApiResponse::forbidden(
            "FORBIDDEN",
            "Cannot manage another user's wishlist",
        ));
    }
    None
}

fn map_wishlist_error(err: WishlistError, user_id: Uuid) -> HttpResponse {
    match &err {
        WishlistError::CarNotFound => {
            warn!(user_id = %user_id, "Wishing for unknown car");
            ApiResponse::not_found("CAR_NOT_FOUND", "Car not found")
        }

        other => {
            error!(user_id = %user_id, error = %other, "Wishlist operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Add a car to a user's wishlist
///
/// Adding a car already on the list is a no-op.
#[utoipa::path(
    post,
    path = "/api/users/{id}/wishlist/{car_id}",
    tag = "preferences",
    params(
        ("id" = Uuid, Path, description = "User id"),
        ("car_id" = Uuid, Path, description = "Car listing id"),
    ),
    responses(
        (status = 204, description = "Car wished (or already on the list)"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Path user differs from the token's subject", body = ErrorResponse),
        (status = 404, description = "Car not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/{id}/wishlist/{car_id}")]
pub async fn add_wishlist_car_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (user_id, car_id) = path.into_inner();
    if let Some(response) = owner_guard(&user, user_id) {
        return response;
    }

    match data.wishlist_use_case.add(user_id, car_id).await {
        Ok(()) => {
            info!(user_id = %user_id, car_id = %car_id, "Car wished");
            ApiResponse::no_content()
        }

        Err(e) => map_wishlist_error(e, user_id),
    }
}

/// Remove a car from a user's wishlist
#[utoipa::path(
    delete,
    path = "/api/users/{id}/wishlist/{car_id}",
    tag = "preferences",
    params(
        ("id" = Uuid, Path, description = "User id"),
        ("car_id" = Uuid, Path, description = "Car listing id"),
    ),
    responses(
        (status = 204, description = "Car removed (or was never on the list)"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Path user differs from the token's subject", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/users/{id}/wishlist/{car_id}")]
pub async fn remove_wishlist_car_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (user_id, car_id) = path.into_inner();
    if let Some(response) = owner_guard(&user, user_id) {
        return response;
    }

    match data.wishlist_use_case.remove(user_id, car_id).await {
        Ok(()) => {
            info!(user_id = %user_id, car_id = %car_id, "Car un-wished");
            ApiResponse::no_content()
        }

        Err(e) => map_wishlist_error(e, user_id),
    }
}

/// List a user's wished cars
#[utoipa::path(
    get,
    path = "/api/users/{id}/wishlist",
    tag = "preferences",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Wishlist fetched", body = inline(SuccessResponse<WishlistResponse>)),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Path user differs from the token's subject", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/{id}/wishlist")]
pub async fn list_wishlist_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    if let Some(response) = owner_guard(&user, user_id) {
        return response;
    }

    match data.wishlist_use_case.list(user_id).await {
        Ok(car_ids) => ApiResponse::success(WishlistResponse {
            user_id: user_id.to_string(),
            car_ids: car_ids.iter().map(Uuid::to_string).collect(),
        }),

        Err(e) => map_wishlist_error(e, user_id),
    }
}
