use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum AccountNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Outbound account mail. Implementations own the message wording and the
/// link construction; callers only supply the addressee and token material.
#[async_trait]
pub trait AccountNotifier: Send + Sync {
    async fn send_activation_email(
        &self,
        to: &str,
        first_name: &str,
        uid_b64: &str,
        token: &str,
    ) -> Result<(), AccountNotificationError>;

    async fn send_password_reset_email(
        &self,
        to: &str,
        first_name: &str,
        uid_b64: &str,
        token: &str,
    ) -> Result<(), AccountNotificationError>;
}
