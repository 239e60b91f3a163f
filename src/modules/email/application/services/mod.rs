pub mod account_mailer;

pub use account_mailer::AccountMailer;
