pub mod complete_order;
pub mod place_order;
