pub mod get_preference;
pub mod save_preference;
pub mod wishlist;
