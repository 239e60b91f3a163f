use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::orders::application::use_cases::complete_order::CompleteOrderError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::place_order::{order_body, OrderResponse};

#[derive(Deserialize, ToSchema)]
pub struct OrderPath {
    pub id: Uuid,
}

fn map_complete_order_error(err: CompleteOrderError, order_id: Uuid) -> HttpResponse {
    match &err {
        CompleteOrderError::OrderNotFound => {
            warn!(order_id = %order_id, "Completing unknown order");
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        CompleteOrderError::InvalidTransition => {
            warn!(order_id = %order_id, "Completing a non-pending order");
            ApiResponse::conflict(
                "INVALID_TRANSITION",
                "Order cannot be completed from its current status",
            )
        }

        other => {
            error!(order_id = %order_id, error = %other, "Order completion failed");
            ApiResponse::internal_error()
        }
    }
}

/// Complete a pending order
///
/// Only PENDING orders can complete; completing twice is rejected.
#[utoipa::path(
    post,
    path = "/api/orders/{id}/complete",
    tag = "orders",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order completed", body = inline(SuccessResponse<OrderResponse>)),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (
            status = 409,
            description = "Order is not pending",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_TRANSITION",
                    "message": "Order cannot be completed from its current status"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/orders/{id}/complete")]
pub async fn complete_order_handler(
    user: AuthenticatedUser,
    path: web::Path<OrderPath>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.complete_order_use_case.execute(path.id).await {
        Ok(order) => {
            info!(order_id = %order.id, completed_by = %user.user_id, "Order completed");
            ApiResponse::success(order_body(order))
        }

        Err(e) => map_complete_order_error(e, path.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::orders::application::domain::entities::{Order, OrderStatus};
    use crate::modules::orders::application::use_cases::complete_order::ICompleteOrderUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header_for, session_token_data};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    struct MockCompleteOrder(fn(Uuid) -> Result<Order, CompleteOrderError>);

    #[async_trait]
    impl ICompleteOrderUseCase for MockCompleteOrder {
        async fn execute(&self, order_id: Uuid) -> Result<Order, CompleteOrderError> {
            (self.0)(order_id)
        }
    }

    async fn call(use_case: impl ICompleteOrderUseCase + 'static) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_complete_order(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_token_data())
                .service(complete_order_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/orders/{}/complete", Uuid::new_v4()))
            .insert_header(bearer_header_for(Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn missing_bearer_token_is_401() {
        let app_state = TestAppStateBuilder::default()
            .with_complete_order(MockCompleteOrder(|_| {
                Err(CompleteOrderError::OrderNotFound)
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_token_data())
                .service(complete_order_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/orders/{}/complete", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401);
    }

    #[actix_web::test]
    async fn completion_returns_completed_order() {
        let (status, body) = call(MockCompleteOrder(|id| {
            Ok(Order {
                id,
                seller_id: Uuid::new_v4(),
                buyer_id: Uuid::new_v4(),
                car_id: Uuid::new_v4(),
                status: OrderStatus::Completed,
                created_at: Utc::now(),
            })
        }))
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["status"], "COMPLETED");
    }

    #[actix_web::test]
    async fn unknown_order_is_404() {
        let (status, body) =
            call(MockCompleteOrder(|_| Err(CompleteOrderError::OrderNotFound))).await;
        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "ORDER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn double_completion_is_409() {
        let (status, body) = call(MockCompleteOrder(|_| {
            Err(CompleteOrderError::InvalidTransition)
        }))
        .await;
        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "INVALID_TRANSITION");
    }
}
