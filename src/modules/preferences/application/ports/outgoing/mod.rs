pub mod preference_repository;
pub mod wishlist_repository;

pub use preference_repository::{PreferenceRepository, PreferenceRepositoryError};
pub use wishlist_repository::{WishlistRepository, WishlistRepositoryError};
