mod complete_order;
mod place_order;

pub use complete_order::complete_order_handler;
pub use place_order::place_order_handler;
