use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::orders::application::domain::entities::Order;
use crate::modules::orders::application::use_cases::place_order::{
    PlaceOrderError, PlaceOrderInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// The buyer is the bearer of the access token, never part of the body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    /// Selling user id; must differ from the buyer
    pub seller_id: Uuid,

    /// Car listing id
    pub car_id: Uuid,
}

#[derive(Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: String,
    pub seller_id: String,
    pub buyer_id: String,
    pub car_id: String,
    /// PENDING or COMPLETED
    pub status: String,
}

pub(super) fn order_body(order: Order) -> OrderResponse {
    OrderResponse {
        id: order.id.to_string(),
        seller_id: order.seller_id.to_string(),
        buyer_id: order.buyer_id.to_string(),
        car_id: order.car_id.to_string(),
        status: order.status.as_str().to_string(),
    }
}

fn map_place_order_error(err: PlaceOrderError) -> HttpResponse {
    match &err {
        // Self-dealing and unresolvable cars share one generic code so the
        // response does not reveal which guard fired.
        PlaceOrderError::SameParty | PlaceOrderError::CarNotFound => {
            warn!(error = %err, "Order rejected");
            ApiResponse::bad_request("REQUEST_REJECTED", "Order request rejected")
        }

        other => {
            error!(error = %other, "Order placement failed");
            ApiResponse::internal_error()
        }
    }
}

/// Place an order for a car
///
/// Orders start PENDING. A user cannot order their own car.
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = inline(SuccessResponse<OrderResponse>)),
        (
            status = 400,
            description = "Self-dealing or unknown car",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "REQUEST_REJECTED", "message": "Order request rejected" }
            })
        ),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/orders")]
pub async fn place_order_handler(
    user: AuthenticatedUser,
    req: web::Json<PlaceOrderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(seller_id = %req.seller_id, buyer_id = %user.user_id, car_id = %req.car_id, "Order placement attempt");

    let input = PlaceOrderInput {
        seller_id: req.seller_id,
        buyer_id: user.user_id,
        car_id: req.car_id,
    };

    match data.place_order_use_case.execute(input).await {
        Ok(order) => {
            info!(order_id = %order.id, "Order placed");
            ApiResponse::created(order_body(order))
        }

        Err(e) => map_place_order_error(e),
    }
}
