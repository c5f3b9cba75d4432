pub mod managers;
pub mod store_service;
pub mod users;
