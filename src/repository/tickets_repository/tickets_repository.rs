use crate::{
    model::{NewTicket, Ticket},
    repository,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository<T: Send + Sync + 'static>: Send + Sync {
    ///
    /// Inserts new ticket.
    ///
    /// ### Returns
    /// Stored ticket with generated id and timestamps
    ///
    /// ### Errors
    /// - [repository::Error::ForeignKeyViolation] when event does not exist
    /// - [repository::Error::CheckViolation] when quantity is not positive
    ///
    async fn insert(&self, transaction: &mut T, ticket: NewTicket)
        -> Result<Ticket, repository::Error>;
}
