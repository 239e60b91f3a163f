use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::email::application::ports::outgoing::{
    AccountNotificationError, AccountNotifier, EmailSender,
};

pub const ACTIVATION_SUBJECT: &str = "Activate Your Carsales Account";
pub const PASSWORD_RESET_SUBJECT: &str = "Reset Your Carsales Account Password";

/// Builds and dispatches account lifecycle mail (activation, password reset).
///
/// Dispatch is synchronous from the caller's point of view: use cases await
/// the send and treat a transport failure as their own failure.
#[derive(Clone)]
pub struct AccountMailer {
    sender: Arc<dyn EmailSender + Send + Sync>,
    app_domain: String,
}

impl fmt::Debug for AccountMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountMailer")
            .field("sender", &"<dyn EmailSender>")
            .field("app_domain", &self.app_domain)
            .finish()
    }
}

impl AccountMailer {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, app_domain: String) -> Self {
        Self { sender, app_domain }
    }

    fn activation_link(&self, uid_b64: &str, token: &str) -> String {
        format!("{}/activate/{}/{}/", self.app_domain, uid_b64, token)
    }

    fn reset_link(&self, uid_b64: &str, token: &str) -> String {
        format!("{}/reset_password/{}/{}/", self.app_domain, uid_b64, token)
    }
}

#[async_trait]
impl AccountNotifier for AccountMailer {
    async fn send_activation_email(
        &self,
        to: &str,
        first_name: &str,
        uid_b64: &str,
        token: &str,
    ) -> Result<(), AccountNotificationError> {
        let link = self.activation_link(uid_b64, token);
        let body = format!(
            r#"
            <p>Hi {},</p>
            <p>Welcome to Carsales. Click the button below to activate your account:</p>
            <p>
                <a href="{}" style="
                    display: inline-block;
                    padding: 10px 20px;
                    background-color: #007BFF;
                    color: white;
                    text-decoration: none;
                    border-radius: 5px;
                ">Activate Account</a>
            </p>
            <p>If you did not sign up, you can ignore this email.</p>
            <p>Thanks,<br>The Carsales Team</p>
            "#,
            first_name, link
        );

        self.sender
            .send_email(to, ACTIVATION_SUBJECT, &body)
            .await
            .map_err(AccountNotificationError::EmailSendingFailed)
    }

    async fn send_password_reset_email(
        &self,
        to: &str,
        first_name: &str,
        uid_b64: &str,
        token: &str,
    ) -> Result<(), AccountNotificationError> {
        let link = self.reset_link(uid_b64, token);
        let body = format!(
            r#"
            <p>Hi {},</p>
            <p>We received a request to reset your Carsales password. Follow the link below:</p>
            <p>
                <a href="{}" style="
                    display: inline-block;
                    padding: 10px 20px;
                    background-color: #007BFF;
                    color: white;
                    text-decoration: none;
                    border-radius: 5px;
                ">Reset Password</a>
            </p>
            <p><strong>Note:</strong> This link is valid for 1 hour and can be used once.</p>
            <p>Thanks,<br>The Carsales Team</p>
            "#,
            first_name, link
        );

        self.sender
            .send_email(to, PASSWORD_RESET_SUBJECT, &body)
            .await
            .map_err(AccountNotificationError::EmailSendingFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::adapter::outgoing::mock_sender::MockEmailSender;

    fn mailer_with_capture() -> (AccountMailer, Arc<MockEmailSender>) {
        let sender = Arc::new(MockEmailSender::new());
        let mailer = AccountMailer::new(sender.clone(), "https://carsales.test".to_string());
        (mailer, sender)
    }

    #[tokio::test]
    async fn activation_email_carries_subject_and_link() {
        let (mailer, sender) = mailer_with_capture();

        mailer
            .send_activation_email("a@x.com", "Alice", "dXNlcg", "token123")
            .await
            .expect("send should succeed");

        let sent = sender.get_sent_emails();
        assert_eq!(sent.len(), 1);
        let (to, subject, body) = &sent[0];
        assert_eq!(to, "a@x.com");
        assert_eq!(subject, ACTIVATION_SUBJECT);
        assert!(body.contains("https://carsales.test/activate/dXNlcg/token123/"));
        assert!(body.contains("Alice"));
    }

    #[tokio::test]
    async fn reset_email_carries_subject_and_link() {
        let (mailer, sender) = mailer_with_capture();

        mailer
            .send_password_reset_email("b@x.com", "Bob", "dXNlcg", "tok")
            .await
            .expect("send should succeed");

        let sent = sender.get_sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1, PASSWORD_RESET_SUBJECT);
        assert!(sent[0].2.contains("/reset_password/dXNlcg/tok/"));
    }

    #[tokio::test]
    async fn transport_failure_surfaces_as_notification_error() {
        struct FailingSender;

        #[async_trait]
        impl EmailSender for FailingSender {
            async fn send_email(&self, _: &str, _: &str, _: &str) -> Result<(), String> {
                Err("SMTP down".to_string())
            }
        }

        let mailer = AccountMailer::new(Arc::new(FailingSender), "https://carsales.test".into());
        let result = mailer
            .send_activation_email("a@x.com", "Alice", "uid", "tok")
            .await;

        assert!(matches!(
            result,
            Err(AccountNotificationError::EmailSendingFailed(_))
        ));
    }
}
