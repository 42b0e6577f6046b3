use crate::{error::AuthError, Claims};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use std::time::Duration;

///
/// Signs access tokens for authenticated subjects.
///
pub struct JwtIssuer {
    header: Header,
    key: EncodingKey,
    issuer: String,
    lifespan: Duration,
}

impl JwtIssuer {
    pub fn new(algorithm: Algorithm, key: EncodingKey, issuer: String, lifespan: Duration) -> Self {
        Self {
            header: Header::new(algorithm),
            key,
            issuer,
            lifespan,
        }
    }

    ///
    /// Issues token with `sub`, `iss`, `iat` and `exp` claims.
    ///
    /// ### Errors
    /// - [AuthError::Encode] when key does not match algorithm
    ///
    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        let iat = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iss: self.issuer.clone(),
            iat,
            exp: iat.saturating_add(self.lifespan.as_secs()),
        };

        jsonwebtoken::encode(&self.header, &claims, &self.key).map_err(AuthError::Encode)
    }
}
