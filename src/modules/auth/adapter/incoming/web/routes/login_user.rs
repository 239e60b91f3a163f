use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::login_user::{LoginError, LoginInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Session access token (JWT)
    access_token: String,

    /// Session refresh token (JWT)
    refresh_token: String,

    user: LoggedInUser,
}

#[derive(Serialize, ToSchema)]
pub struct LoggedInUser {
    id: String,
    email: String,
    first_name: String,
    last_name: String,
}

fn map_login_error(err: LoginError, email: &str) -> HttpResponse {
    match &err {
        LoginError::InvalidCredentials => {
            warn!(email = %email, "Login rejected");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        other => {
            error!(email = %email, error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// Log in with email and password
///
/// Unknown addresses, wrong passwords and not-yet-activated accounts all get
/// the same 401 so the endpoint does not reveal which emails exist.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (
            status = 200,
            description = "Logged in",
            body = inline(SuccessResponse<LoginResponse>)
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(email = %req.email, "Login attempt");

    let input = LoginInput {
        email: req.email.clone(),
        password: req.password.clone(),
    };

    match data.login_use_case.execute(input).await {
        Ok(output) => {
            info!(user_id = %output.user_id, "Login succeeded");

            ApiResponse::success(LoginResponse {
                access_token: output.access_token,
                refresh_token: output.refresh_token,
                user: LoggedInUser {
                    id: output.user_id.to_string(),
                    email: output.email,
                    first_name: output.first_name,
                    last_name: output.last_name,
                },
            })
        }

        Err(e) => map_login_error(e, &req.email),
    }
}
