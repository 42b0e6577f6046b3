mod auth_service;
mod auth_service_impl;
mod dto;

pub use auth_service::*;
pub use auth_service_impl::*;
pub use dto::AuthServiceConfig;
