use crate::model;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct Ticket {
    pub id: i64,
    pub event_id: i64,
    pub quantity: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub booked_at: OffsetDateTime,
    pub customer_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<model::Ticket> for Ticket {
    fn from(ticket: model::Ticket) -> Self {
        Self {
            id: ticket.id,
            event_id: ticket.event_id,
            quantity: ticket.quantity,
            booked_at: ticket.booked_at,
            customer_name: ticket.customer_name,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}
