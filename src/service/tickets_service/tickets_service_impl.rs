use super::TicketsService;
use crate::{
    dto::{input, output},
    error::Error,
    model::Ticket,
    repository::{EventsRepository, TicketsRepository, TransactionManager},
    service::transaction,
};
use axum::async_trait;
use std::sync::Arc;

pub struct TicketsServiceImpl<M: TransactionManager> {
    transaction_manager: Arc<M>,
    events_repository: Arc<dyn EventsRepository<M::Transaction>>,
    tickets_repository: Arc<dyn TicketsRepository<M::Transaction>>,
}

impl<M: TransactionManager> TicketsServiceImpl<M> {
    pub fn new(
        transaction_manager: Arc<M>,
        events_repository: Arc<dyn EventsRepository<M::Transaction>>,
        tickets_repository: Arc<dyn TicketsRepository<M::Transaction>>,
    ) -> Self {
        Self {
            transaction_manager,
            events_repository,
            tickets_repository,
        }
    }

    fn validate_booking(booking: &input::Booking) -> Result<(), Error> {
        if booking.customer_name.trim().is_empty() {
            return Err(Error::Validation("customer_name must not be empty"));
        }
        if booking.quantity <= 0 {
            return Err(Error::Validation("quantity must be greater than 0"));
        }

        Ok(())
    }

    async fn book_tickets_in_transaction(
        &self,
        transaction: &mut M::Transaction,
        event_id: i64,
        booking: input::Booking,
    ) -> Result<Ticket, Error> {
        let mut event = self
            .events_repository
            .find_by_id_for_update(transaction, event_id)
            .await?
            .ok_or(Error::EventNotExist)?;

        let ticket = event.reserve(booking.quantity, booking.customer_name)?;
        tracing::debug!(remaining = event.remaining_tickets, "reserved tickets");

        self.events_repository.update(transaction, &event).await?;
        let ticket = self.tickets_repository.insert(transaction, ticket).await?;

        Ok(ticket)
    }
}

#[async_trait]
impl<M: TransactionManager> TicketsService for TicketsServiceImpl<M> {
    async fn book_tickets(
        &self,
        event_id: i64,
        booking: input::Booking,
    ) -> Result<output::Ticket, Error> {
        tracing::info!(event_id, "booking tickets");
        tracing::trace!(?booking);

        Self::validate_booking(&booking)?;

        let mut transaction = transaction::begin(self.transaction_manager.as_ref()).await?;
        let result = self
            .book_tickets_in_transaction(&mut transaction, event_id, booking)
            .await;
        let ticket = transaction::finish(self.transaction_manager.as_ref(), transaction, result)
            .await?;

        tracing::info!(id = ticket.id, quantity = ticket.quantity, "booked tickets");

        Ok(ticket.into())
    }
}
