mod get_preference;
mod save_preference;
mod wishlist;

pub use get_preference::get_preference_handler;
pub use save_preference::save_preference_handler;
pub use wishlist::{add_wishlist_car_handler, list_wishlist_handler, remove_wishlist_car_handler};
