pub mod crypto;
pub mod travel_api;
