use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    AccountTokenService, SessionClaims, TokenError, TokenProvider, TokenPurpose,
};

use super::jwt_config::JwtConfig;

/// Claims carried by activation and password-reset link tokens. The stamp is
/// the user's security stamp at issue time; once the stamp changes the token
/// no longer validates.
#[derive(Debug, Serialize, Deserialize)]
struct AccountClaims {
    sub: Uuid,
    exp: i64,
    purpose: String,
    stamp: String,
}

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_session_token(
        &self,
        user_id: Uuid,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(expiry_seconds);

        let claims = SessionClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::GenerationFailed(e.to_string()))
    }

    /// Separate key material per token purpose, so an activation token can
    /// never pass as a reset token even with matching claims.
    fn purpose_key(&self, purpose: TokenPurpose) -> (EncodingKey, DecodingKey) {
        let salted = format!("{}:{}", self.config.secret_key, purpose.as_str());
        (
            EncodingKey::from_secret(salted.as_bytes()),
            DecodingKey::from_secret(salted.as_bytes()),
        )
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.generate_session_token(user_id, "access", self.config.access_token_expiry)
    }

    fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.generate_session_token(user_id, "refresh", self.config.refresh_token_expiry)
    }

    fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;

        let decoded = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: token expired");
                        TokenError::Expired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Token verification failed: invalid signature");
                        TokenError::Invalid("invalid signature".to_string())
                    }
                    _ => {
                        tracing::debug!("Token verification failed: malformed token");
                        TokenError::Invalid("malformed token".to_string())
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

impl AccountTokenService for JwtTokenService {
    fn issue(
        &self,
        purpose: TokenPurpose,
        user_id: Uuid,
        security_stamp: &str,
    ) -> Result<String, TokenError> {
        let (encoding_key, _) = self.purpose_key(purpose);
        let expiry_seconds = match purpose {
            TokenPurpose::Activate => self.config.activation_token_expiry,
            TokenPurpose::ResetPassword => self.config.reset_token_expiry,
        };
        let expiration = Utc::now() + Duration::seconds(expiry_seconds);

        let claims = AccountClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            purpose: purpose.as_str().to_string(),
            stamp: security_stamp.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
            .map_err(|e| TokenError::GenerationFailed(e.to_string()))
    }

    fn validate(
        &self,
        purpose: TokenPurpose,
        user_id: Uuid,
        security_stamp: &str,
        token: &str,
    ) -> bool {
        let (_, decoding_key) = self.purpose_key(purpose);
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;

        let claims = match decode::<AccountClaims>(token, &decoding_key, &validation) {
            Ok(decoded) => decoded.claims,
            Err(e) => {
                tracing::debug!("Account token rejected: {}", e);
                return false;
            }
        };

        claims.sub == user_id
            && claims.purpose == purpose.as_str()
            && claims.stamp == security_stamp
    }
}
