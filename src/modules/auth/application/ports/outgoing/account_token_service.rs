use uuid::Uuid;

use super::token_provider::TokenError;

/// The two single-use token flows. Each purpose signs with its own derived
/// key, so a token issued for one purpose never validates for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    Activate,
    ResetPassword,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPurpose::Activate => "activate",
            TokenPurpose::ResetPassword => "reset-password",
        }
    }
}

/// Issues and validates account lifecycle tokens.
///
/// Tokens bind the user id, the purpose, and the user's current security
/// stamp. Validation takes the *current* stamp, so any credential change
/// since issue makes the token invalid. `validate` fails closed: malformed
/// input of any kind yields `false`, never an error.
pub trait AccountTokenService: Send + Sync {
    fn issue(
        &self,
        purpose: TokenPurpose,
        user_id: Uuid,
        security_stamp: &str,
    ) -> Result<String, TokenError>;

    fn validate(
        &self,
        purpose: TokenPurpose,
        user_id: Uuid,
        security_stamp: &str,
        token: &str,
    ) -> bool;
}
