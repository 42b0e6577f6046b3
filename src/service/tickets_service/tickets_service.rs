use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Book tickets of the event. Taking tickets out of event inventory
    /// and storing the ticket either both happen or none does.
    ///
    /// Concurrent bookings of the same event are serialized.
    ///
    /// ### Returns
    /// Stored ticket
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - customer_name is empty
    ///     - quantity is not positive
    /// - [Error::EventNotExist] when event with id does not exist
    /// - [Error::InsufficientInventory] when quantity exceeds remaining tickets
    /// - [Error::TransactionUnavailable] when transaction could not be started
    ///
    async fn book_tickets(
        &self,
        event_id: i64,
        booking: input::Booking,
    ) -> Result<output::Ticket, Error>;
}
