use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    ///
    /// Exchange credentials for access token
    ///
    /// ### Errors
    /// - [Error::InvalidCredentials] when credentials don't match configured ones
    /// - [Error::Token] when token could not be signed
    ///
    async fn login(&self, credentials: input::Credentials) -> Result<output::AccessToken, Error>;
}
