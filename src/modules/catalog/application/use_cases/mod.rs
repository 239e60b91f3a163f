pub mod create_listing;
pub mod get_listing;
pub mod manage_reference_data;
