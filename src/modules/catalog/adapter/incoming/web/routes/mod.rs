mod add_brand;
mod add_fuel_type;
mod add_model;
mod add_transmission_type;
mod create_car;
mod get_car;

pub use add_brand::add_brand_handler;
pub use add_fuel_type::add_fuel_type_handler;
pub use add_model::add_model_handler;
pub use add_transmission_type::add_transmission_type_handler;
pub use create_car::create_car_handler;
pub use get_car::get_car_handler;
