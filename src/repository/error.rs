use sqlx::error::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no row updated")]
    NoRowUpdated,

    #[error("check constraint violation: {0}")]
    CheckViolation(String),

    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl Error {
    ///
    /// Distinguishes constraint violations from other database errors
    ///
    pub fn from_write(err: sqlx::Error) -> Self {
        let Some(database_error) = err.as_database_error() else {
            return Error::Sqlx(err);
        };

        match database_error.kind() {
            ErrorKind::CheckViolation => Error::CheckViolation(database_error.message().to_string()),
            ErrorKind::ForeignKeyViolation => {
                Error::ForeignKeyViolation(database_error.message().to_string())
            }
            _ => Error::Sqlx(err),
        }
    }
}
