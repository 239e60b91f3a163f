use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use uuid::Uuid;

use crate::email::application::ports::outgoing::AccountNotifier;
use crate::modules::auth::application::domain::entities::{User, UserProfile};
use crate::modules::auth::application::ports::outgoing::{
    AccountTokenService, PasswordHasher, TokenPurpose, UserQuery, UserRepository,
    UserRepositoryError,
};
use crate::modules::auth::application::services::uid_codec::encode_uid;

// Australian mobile without country code: ten digits starting with 04.
fn mobile_pattern() -> &'static Regex {
    static MOBILE_RE: OnceLock<Regex> = OnceLock::new();
    MOBILE_RE.get_or_init(|| Regex::new(r"^04\d{8}$").expect("Invalid mobile pattern"))
}

// ============================================================================
// Input / Output
// ============================================================================

#[derive(Debug, Clone)]
pub struct SignUpInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password1: String,
    pub password2: String,
    pub number: String,
}

#[derive(Debug, Clone)]
pub struct SignUpOutput {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub message: String,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignUpError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid mobile: {0}")]
    InvalidMobile(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Mobile number already registered")]
    DuplicateMobile,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Activation email failed: {0}")]
    EmailSendingFailed(String),
}

// ============================================================================
// Use case
// ============================================================================

#[async_trait]
pub trait ISignUpUseCase: Send + Sync {
    async fn execute(&self, input: SignUpInput) -> Result<SignUpOutput, SignUpError>;
}

pub struct SignUpUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    account_tokens: Arc<dyn AccountTokenService + Send + Sync>,
    notifier: Arc<dyn AccountNotifier + Send + Sync>,
}

impl<Q, R> SignUpUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        account_tokens: Arc<dyn AccountTokenService + Send + Sync>,
        notifier: Arc<dyn AccountNotifier + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            account_tokens,
            notifier,
        }
    }

    fn validate(input: &SignUpInput) -> Result<(String, String, String, String), SignUpError> {
        let email = input.email.trim().to_lowercase();
        if email.is_empty() || !EmailAddress::is_valid(&email) {
            return Err(SignUpError::InvalidEmail(
                "A valid email address is required".to_string(),
            ));
        }

        let first_name = input.first_name.trim().to_string();
        if first_name.is_empty() {
            return Err(SignUpError::InvalidName(
                "First name cannot be empty".to_string(),
            ));
        }
        let last_name = input.last_name.trim().to_string();
        if last_name.is_empty() {
            return Err(SignUpError::InvalidName(
                "Last name cannot be empty".to_string(),
            ));
        }

        let mobile = input.number.trim().to_string();
        if !mobile_pattern().is_match(&mobile) {
            return Err(SignUpError::InvalidMobile(
                "Mobile number must be 10 digits starting with 04".to_string(),
            ));
        }

        if input.password1.is_empty() || input.password1 != input.password2 {
            return Err(SignUpError::PasswordMismatch);
        }

        Ok((email, first_name, last_name, mobile))
    }
}

#[async_trait]
impl<Q, R> ISignUpUseCase for SignUpUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: SignUpInput) -> Result<SignUpOutput, SignUpError> {
        let (email, first_name, last_name, mobile) = Self::validate(&input)?;

        // Existence re-checks right before insert; the unique indexes
        // backstop the remaining race window.
        let existing = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| SignUpError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(SignUpError::DuplicateEmail);
        }
        let existing_profile = self
            .query
            .find_profile_by_mobile(&mobile)
            .await
            .map_err(|e| SignUpError::RepositoryError(e.to_string()))?;
        if existing_profile.is_some() {
            return Err(SignUpError::DuplicateMobile);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password1)
            .await
            .map_err(|e| SignUpError::HashingFailed(e.to_string()))?;

        let user = User {
            id: Uuid::new_v4(),
            email: email.clone(),
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            password_hash,
            is_active: false,
            security_stamp: User::fresh_security_stamp(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let profile = UserProfile {
            user_id: user.id,
            mobile,
            email_confirmed: false,
            address: None,
        };

        let user = self
            .repository
            .create_user_with_profile(user, profile)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => SignUpError::DuplicateEmail,
                other => SignUpError::RepositoryError(other.to_string()),
            })?;

        let token = self
            .account_tokens
            .issue(TokenPurpose::Activate, user.id, &user.security_stamp)
            .map_err(|e| SignUpError::TokenGenerationFailed(e.to_string()))?;

        // Dispatch completes (or fails loudly) before the caller gets its
        // response; there is no background retry.
        self.notifier
            .send_activation_email(&user.email, &user.first_name, &encode_uid(user.id), &token)
            .await
            .map_err(|e| SignUpError::EmailSendingFailed(e.to_string()))?;

        Ok(SignUpOutput {
            user_id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            message: "Account created. Please check your email to activate your account."
                .to_string(),
        })
    }
}
