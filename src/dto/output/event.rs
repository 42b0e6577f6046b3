use crate::model;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub number_of_tickets: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date_time: OffsetDateTime,
    pub duration: i32,
    pub remaining_tickets: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<model::Event> for Event {
    fn from(event: model::Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            number_of_tickets: event.number_of_tickets,
            start_date_time: event.start_date_time,
            duration: event.duration,
            remaining_tickets: event.remaining_tickets,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}
