use super::TicketsRepository;
use crate::{
    model::{NewTicket, Ticket},
    repository::{self, Error, PgTransaction},
};
use axum::async_trait;
use sqlx::PgPool;

const TICKETS: &str = "tickets";
const INDEX_NAME_TICKETS_EVENT_ID: &str = "index_tickets_event_id";

pub struct TicketsRepositoryImpl;

impl TicketsRepositoryImpl {
    ///
    /// Requires `events` table to exist
    ///
    pub async fn new(pool: &PgPool) -> Result<Self, sqlx::Error> {
        tracing::debug!(table = TICKETS, "creating table");
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tickets (
                id BIGSERIAL PRIMARY KEY,
                event_id BIGINT NOT NULL REFERENCES events (id) ON DELETE CASCADE,
                quantity INTEGER NOT NULL CHECK (quantity > 0),
                booked_at TIMESTAMPTZ NOT NULL,
                customer_name TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS index_tickets_event_id ON tickets (event_id)")
            .execute(pool)
            .await?;
        tracing::debug!(
            table = TICKETS,
            index = INDEX_NAME_TICKETS_EVENT_ID,
            "created index"
        );

        Ok(Self)
    }
}

#[async_trait]
impl TicketsRepository<PgTransaction> for TicketsRepositoryImpl {
    async fn insert(
        &self,
        transaction: &mut PgTransaction,
        ticket: NewTicket,
    ) -> Result<Ticket, repository::Error> {
        let ticket = sqlx::query_as::<_, Ticket>(
            "INSERT INTO tickets (event_id, quantity, booked_at, customer_name) \
            VALUES ($1, $2, $3, $4) \
            RETURNING id, event_id, quantity, booked_at, customer_name, created_at, updated_at",
        )
        .bind(ticket.event_id)
        .bind(ticket.quantity)
        .bind(ticket.booked_at)
        .bind(ticket.customer_name)
        .fetch_one(&mut **transaction)
        .await
        .map_err(Error::from_write)?;

        Ok(ticket)
    }
}
