pub mod activate_account;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
pub mod request_password_reset;
pub mod reset_password;
pub mod sign_up;
