use time::OffsetDateTime;

///
/// Booking of some quantity of event's tickets.
/// Immutable once stored.
///
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Ticket {
    pub id: i64,
    pub event_id: i64,
    pub quantity: i32,
    pub booked_at: OffsetDateTime,
    pub customer_name: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

///
/// Ticket that was already debited from the event
/// but was not stored yet.
///
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub event_id: i64,
    pub quantity: i32,
    pub booked_at: OffsetDateTime,
    pub customer_name: String,
}
