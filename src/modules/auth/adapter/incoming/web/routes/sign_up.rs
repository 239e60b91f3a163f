use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::sign_up::{SignUpError, SignUpInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for account registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SignUpRequest {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// First name
    #[schema(example = "Jane")]
    pub first_name: String,

    /// Last name
    #[schema(example = "Citizen")]
    pub last_name: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password1: String,

    /// Password confirmation, must match `password1`
    #[schema(example = "SecurePass123!")]
    pub password2: String,

    /// Australian mobile number (04xxxxxxxx)
    #[schema(example = "0412345678")]
    pub number: String,
}

#[derive(Serialize, ToSchema)]
pub struct SignUpResponse {
    /// Instruction shown to the user
    #[schema(example = "Account created. Please check your email to activate your account.")]
    message: String,

    user: CreatedUser,
}

#[derive(Serialize, ToSchema)]
pub struct CreatedUser {
    /// User ID (UUID)
    id: String,

    /// Email address
    email: String,

    /// First name
    first_name: String,

    /// Last name
    last_name: String,
}

fn map_sign_up_error(err: SignUpError, email: &str) -> HttpResponse {
    match &err {
        SignUpError::InvalidEmail(msg) => {
            warn!(email = %email, error = %err, "Invalid signup input");
            ApiResponse::bad_request("INVALID_EMAIL", msg)
        }

        SignUpError::InvalidName(msg) => {
            warn!(email = %email, error = %err, "Invalid signup input");
            ApiResponse::bad_request("INVALID_NAME", msg)
        }

        SignUpError::InvalidMobile(msg) => {
            warn!(email = %email, error = %err, "Invalid signup input");
            ApiResponse::bad_request("INVALID_MOBILE", msg)
        }

        SignUpError::PasswordMismatch => {
            warn!(email = %email, "Signup password mismatch");
            ApiResponse::bad_request("PASSWORD_MISMATCH", "Passwords do not match")
        }

        SignUpError::DuplicateEmail => {
            warn!(email = %email, "Signup with already-registered email");
            ApiResponse::conflict("DUPLICATE_EMAIL", "Email already registered")
        }

        SignUpError::DuplicateMobile => {
            warn!(email = %email, "Signup with already-registered mobile");
            ApiResponse::conflict("DUPLICATE_MOBILE", "Mobile number already registered")
        }

        other => {
            error!(email = %email, error = %other, "Signup failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
///
/// Creates an inactive account and sends an activation email. The account
/// cannot log in until the activation link is followed.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignUpRequest,
    responses(
        (
            status = 201,
            description = "Account created, activation email sent",
            body = inline(SuccessResponse<SignUpResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Account created. Please check your email to activate your account.",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "email": "jane@example.com",
                        "first_name": "Jane",
                        "last_name": "Citizen"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_MOBILE", "message": "Mobile must match 04xxxxxxxx" }
            })
        ),
        (
            status = 409,
            description = "Email or mobile already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "DUPLICATE_EMAIL", "message": "Email already registered" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/signup")]
pub async fn sign_up_handler(
    req: web::Json<SignUpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(email = %req.email, "Signup attempt");

    let input = SignUpInput {
        email: req.email.clone(),
        first_name: req.first_name.clone(),
        last_name: req.last_name.clone(),
        password1: req.password1.clone(),
        password2: req.password2.clone(),
        number: req.number.clone(),
    };

    match data.sign_up_use_case.execute(input).await {
        Ok(output) => {
            info!(user_id = %output.user_id, email = %output.email, "Account created");

            ApiResponse::created(SignUpResponse {
                message: output.message,
                user: CreatedUser {
                    id: output.user_id.to_string(),
                    email: output.email,
                    first_name: output.first_name,
                    last_name: output.last_name,
                },
            })
        }

        Err(e) => map_sign_up_error(e, &req.email),
    }
}
