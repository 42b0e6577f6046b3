mod auth_service_config;

pub use auth_service_config::*;
