#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingAuthorizationHeader,

    #[error("illegal character in Authorization header")]
    IllegalCharacter,

    #[error("unsupported authorization type")]
    UnsupportedAuthorizationType,

    #[error("invalid jwt: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("failed to encode jwt: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
}
