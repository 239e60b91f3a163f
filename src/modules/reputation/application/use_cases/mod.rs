pub mod average_rating;
pub mod rate_user;
