use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account identity. The email doubles as the login handle; `is_active`
/// stays false until the address is confirmed through the activation link.
#[derive(Debug, Clone, serde::Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    /// Bumped whenever credential-relevant state changes (activation,
    /// password change). Outstanding activation/reset tokens embed the stamp
    /// they were issued against, so a bump invalidates all of them.
    #[serde(skip_serializing)]
    pub security_stamp: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn fresh_security_stamp() -> String {
        Uuid::new_v4().simple().to_string()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Extra per-user fields, created in the same transaction as the `User` row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub mobile: String,
    pub email_confirmed: bool,
    pub address: Option<String>,
}
