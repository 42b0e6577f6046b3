use super::NewTicket;
use time::OffsetDateTime;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReserveError {
    #[error("quantity must be greater than 0")]
    InvalidQuantity,

    #[error("not enough tickets available: requested {requested}, remaining {remaining}")]
    InsufficientInventory { requested: i32, remaining: i32 },
}

///
/// Event with fixed ticket inventory.
///
/// `0 <= remaining_tickets <= number_of_tickets` holds
/// for every stored event.
///
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub number_of_tickets: i32,
    pub remaining_tickets: i32,
    pub start_date_time: OffsetDateTime,
    /// minutes
    pub duration: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub number_of_tickets: i32,
    pub remaining_tickets: i32,
    pub start_date_time: OffsetDateTime,
    pub duration: i32,
}

impl NewEvent {
    ///
    /// Creates event with all tickets available
    ///
    pub fn new(
        name: String,
        description: String,
        number_of_tickets: i32,
        start_date_time: OffsetDateTime,
        duration: i32,
    ) -> Self {
        Self {
            name,
            description,
            number_of_tickets,
            remaining_tickets: number_of_tickets,
            start_date_time,
            duration,
        }
    }
}

impl Event {
    ///
    /// Takes `quantity` tickets out of remaining inventory.
    ///
    /// Only in-memory state is changed. Caller is responsible
    /// for storing both the event and returned ticket.
    ///
    /// ### Errors
    /// - [ReserveError::InvalidQuantity] when quantity is not positive
    /// - [ReserveError::InsufficientInventory] when quantity exceeds remaining tickets
    ///
    /// Event is left untouched when error is returned.
    ///
    pub fn reserve(
        &mut self,
        quantity: i32,
        customer_name: String,
    ) -> Result<NewTicket, ReserveError> {
        if quantity <= 0 {
            return Err(ReserveError::InvalidQuantity);
        }
        if quantity > self.remaining_tickets {
            return Err(ReserveError::InsufficientInventory {
                requested: quantity,
                remaining: self.remaining_tickets,
            });
        }

        self.remaining_tickets -= quantity;

        Ok(NewTicket {
            event_id: self.id,
            quantity,
            booked_at: OffsetDateTime::now_utc(),
            customer_name,
        })
    }
}
