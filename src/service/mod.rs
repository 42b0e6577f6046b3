pub mod auth_service;
pub mod events_service;
pub mod tickets_service;

mod transaction;
