pub mod auth;
pub mod catalog;
pub mod email;
pub mod orders;
pub mod preferences;
pub mod reputation;
