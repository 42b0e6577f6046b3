use super::EventsRepository;
use crate::{
    model::{Event, NewEvent},
    repository::{self, Error, PgTransaction},
};
use axum::async_trait;
use sqlx::PgPool;

const EVENTS: &str = "events";

pub struct EventsRepositoryImpl;

impl EventsRepositoryImpl {
    pub async fn new(pool: &PgPool) -> Result<Self, sqlx::Error> {
        tracing::debug!(table = EVENTS, "creating table");
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS events (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                number_of_tickets INTEGER NOT NULL CHECK (number_of_tickets > 0),
                remaining_tickets INTEGER NOT NULL,
                start_date_time TIMESTAMPTZ NOT NULL,
                duration INTEGER NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                CONSTRAINT remaining_tickets_in_range
                    CHECK (remaining_tickets >= 0 AND remaining_tickets <= number_of_tickets)
            )",
        )
        .execute(pool)
        .await?;

        Ok(Self)
    }
}

#[async_trait]
impl EventsRepository<PgTransaction> for EventsRepositoryImpl {
    async fn insert(
        &self,
        transaction: &mut PgTransaction,
        event: NewEvent,
    ) -> Result<Event, repository::Error> {
        let event = sqlx::query_as::<_, Event>(
            "INSERT INTO events \
            (name, description, number_of_tickets, remaining_tickets, start_date_time, duration) \
            VALUES ($1, $2, $3, $4, $5, $6) \
            RETURNING id, name, description, number_of_tickets, remaining_tickets, \
            start_date_time, duration, created_at, updated_at",
        )
        .bind(event.name)
        .bind(event.description)
        .bind(event.number_of_tickets)
        .bind(event.remaining_tickets)
        .bind(event.start_date_time)
        .bind(event.duration)
        .fetch_one(&mut **transaction)
        .await
        .map_err(Error::from_write)?;

        Ok(event)
    }

    async fn find_by_id(
        &self,
        transaction: &mut PgTransaction,
        id: i64,
    ) -> Result<Option<Event>, repository::Error> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, name, description, number_of_tickets, remaining_tickets, \
            start_date_time, duration, created_at, updated_at \
            FROM events WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut **transaction)
        .await?;

        Ok(event)
    }

    async fn find_by_id_for_update(
        &self,
        transaction: &mut PgTransaction,
        id: i64,
    ) -> Result<Option<Event>, repository::Error> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, name, description, number_of_tickets, remaining_tickets, \
            start_date_time, duration, created_at, updated_at \
            FROM events WHERE id = $1 \
            FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut **transaction)
        .await?;

        Ok(event)
    }

    async fn update(
        &self,
        transaction: &mut PgTransaction,
        event: &Event,
    ) -> Result<Event, repository::Error> {
        let event = sqlx::query_as::<_, Event>(
            "UPDATE events SET \
            name = $2, \
            description = $3, \
            number_of_tickets = $4, \
            remaining_tickets = $5, \
            start_date_time = $6, \
            duration = $7, \
            updated_at = now() \
            WHERE id = $1 \
            RETURNING id, name, description, number_of_tickets, remaining_tickets, \
            start_date_time, duration, created_at, updated_at",
        )
        .bind(event.id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.number_of_tickets)
        .bind(event.remaining_tickets)
        .bind(event.start_date_time)
        .bind(event.duration)
        .fetch_optional(&mut **transaction)
        .await
        .map_err(Error::from_write)?
        .ok_or(Error::NoRowUpdated)?;

        Ok(event)
    }
}
