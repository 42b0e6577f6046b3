use super::{AuthService, AuthServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use jwt_auth::JwtIssuer;

pub struct AuthServiceImpl {
    config: AuthServiceConfig,
    issuer: JwtIssuer,
}

impl AuthServiceImpl {
    pub fn new(config: AuthServiceConfig, issuer: JwtIssuer) -> Self {
        Self { config, issuer }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, credentials: input::Credentials) -> Result<output::AccessToken, Error> {
        tracing::info!(username = credentials.username, "logging in");

        if credentials.username != self.config.username
            || credentials.password != self.config.password
        {
            return Err(Error::InvalidCredentials);
        }

        let token = self.issuer.issue(&credentials.username)?;
        tracing::info!("issued access token");

        Ok(output::AccessToken { token })
    }
}
