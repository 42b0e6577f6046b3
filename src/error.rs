use crate::{dto::output, model::ReserveError, repository};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jwt_auth::error::AuthError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("payload too large")]
    PayloadTooLarge,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("not enough tickets available: requested {requested}, remaining {remaining}")]
    InsufficientInventory { requested: i32, remaining: i32 },

    #[error("event not exist")]
    EventNotExist,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("transaction unavailable: {0}")]
    TransactionUnavailable(#[source] repository::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    ///
    /// Token could not be signed with configured key
    ///
    #[error("token error: {0}")]
    Token(#[from] AuthError),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::InsufficientInventory { .. } => StatusCode::BAD_REQUEST,
            Error::EventNotExist => StatusCode::NOT_FOUND,
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::TransactionUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ReserveError> for Error {
    fn from(err: ReserveError) -> Self {
        match err {
            ReserveError::InvalidQuantity => Error::Validation("quantity must be greater than 0"),
            ReserveError::InsufficientInventory {
                requested,
                remaining,
            } => Error::InsufficientInventory {
                requested,
                remaining,
            },
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Error::PayloadTooLarge;
        }

        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(_: PathRejection) -> Self {
        Error::InvalidRequest("invalid event id format".to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        // cause of server errors stays in logs
        let message = match status_code.is_server_error() {
            true => {
                tracing::error!(err = %self);
                "internal server error".to_string()
            }
            false => {
                tracing::warn!(err = %self);
                self.to_string()
            }
        };

        (status_code, Json(output::ErrorMessage { message })).into_response()
    }
}
