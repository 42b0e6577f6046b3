//!
//! Bearer token authentication shared by the HTTP services.
//!
//! Issues signed JWTs and provides a tower layer that rejects
//! requests without a valid token. Authenticated requests get
//! a [User] in their extensions.
//!

pub mod error;
pub mod issuer;
pub mod middleware;
pub mod util;

mod dto;


pub use dto::*;
pub use issuer::JwtIssuer;
pub use middleware::JwtAuthLayer;
