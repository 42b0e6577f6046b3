use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Deserialize)]
pub struct Event {
    pub name: String,
    pub description: String,
    pub number_of_tickets: i32,
    /// ISO 8601
    #[serde(with = "time::serde::rfc3339")]
    pub start_date_time: OffsetDateTime,
    /// minutes
    pub duration: i32,
}
