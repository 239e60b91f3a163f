pub mod car_brands;
pub mod car_listings;
pub mod car_models;
pub mod fuel_types;
pub mod transmission_types;
