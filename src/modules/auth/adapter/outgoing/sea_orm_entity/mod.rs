pub mod user_profiles;
pub mod users;
