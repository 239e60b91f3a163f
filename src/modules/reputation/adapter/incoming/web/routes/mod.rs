mod get_rating;
mod rate_user;

pub use get_rating::get_rating_handler;
pub use rate_user::{rate_buyer_handler, rate_seller_handler};
