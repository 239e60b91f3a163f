mod activate_account;
mod forgot_password;
mod login_user;
mod logout_user;
mod refresh_token;
mod reset_password;
mod sign_up;

pub use activate_account::activate_account_handler;
pub use forgot_password::forgot_password_handler;
pub use login_user::login_user_handler;
pub use logout_user::logout_user_handler;
pub use refresh_token::refresh_token_handler;
pub use reset_password::reset_password_handler;
pub use sign_up::sign_up_handler;
