//! Bearer-token plumbing for guarded-route tests. Every helper builds its
//! token service from the same fixed secret, so a token minted by one
//! instance verifies against the app data registered by another.

use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::TokenProvider;

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_with_enough_length_for_hs256".to_string(),
        issuer: "Carsales".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
        activation_token_expiry: 86400,
        reset_token_expiry: 3600,
    })
}

/// App data the `AuthenticatedUser` extractor resolves in tests.
pub fn session_token_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let session_tokens: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(create_test_jwt_service());
    web::Data::new(session_tokens)
}

pub fn bearer_header_for(user_id: Uuid) -> (&'static str, String) {
    let token = create_test_jwt_service()
        .generate_access_token(user_id)
        .expect("Failed to generate token");
    ("Authorization", format!("Bearer {token}"))
}
