pub mod preferences;
pub mod wishlist_cars;
