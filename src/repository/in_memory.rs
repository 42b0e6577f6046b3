//!
//! Repositories that keep rows in memory.
//!
//! A transaction holds the lock of the whole database and works
//! on its own copy of the tables, which is written back on commit.
//! Transactions are therefore fully serialized.
//!

use super::{Error, EventsRepository, TicketsRepository, TransactionManager};
use crate::model::{Event, NewEvent, NewTicket, Ticket};
use axum::async_trait;
use std::{collections::BTreeMap, sync::Arc};
use time::OffsetDateTime;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Default, Clone)]
pub struct InMemoryTables {
    pub events: BTreeMap<i64, Event>,
    pub tickets: BTreeMap<i64, Ticket>,
    next_event_id: i64,
    next_ticket_id: i64,
}

pub struct InMemoryTransaction {
    guard: OwnedMutexGuard<InMemoryTables>,
    staged: InMemoryTables,
}

#[derive(Default, Clone)]
pub struct InMemoryDatabase {
    tables: Arc<Mutex<InMemoryTables>>,
}

impl InMemoryDatabase {
    ///
    /// Committed state of the tables
    ///
    pub async fn snapshot(&self) -> InMemoryTables {
        self.tables.lock().await.clone()
    }

    pub async fn insert_event(&self, event: NewEvent) -> Event {
        let mut transaction = self.begin().await.unwrap();
        let event = EventsRepository::insert(self, &mut transaction, event)
            .await
            .unwrap();
        self.commit(transaction).await.unwrap();

        event
    }
}

fn check_inventory(event: &Event) -> Result<(), Error> {
    match 0 <= event.remaining_tickets && event.remaining_tickets <= event.number_of_tickets {
        true => Ok(()),
        false => Err(Error::CheckViolation(
            "remaining_tickets_in_range".to_string(),
        )),
    }
}

#[async_trait]
impl TransactionManager for InMemoryDatabase {
    type Transaction = InMemoryTransaction;

    async fn begin(&self) -> Result<Self::Transaction, Error> {
        let guard = self.tables.clone().lock_owned().await;
        let staged = guard.clone();

        Ok(InMemoryTransaction { guard, staged })
    }

    async fn commit(&self, transaction: Self::Transaction) -> Result<(), Error> {
        let InMemoryTransaction { mut guard, staged } = transaction;
        *guard = staged;

        Ok(())
    }

    async fn rollback(&self, transaction: Self::Transaction) -> Result<(), Error> {
        drop(transaction);

        Ok(())
    }
}

#[async_trait]
impl EventsRepository<InMemoryTransaction> for InMemoryDatabase {
    async fn insert(
        &self,
        transaction: &mut InMemoryTransaction,
        event: NewEvent,
    ) -> Result<Event, Error> {
        let tables = &mut transaction.staged;
        tables.next_event_id += 1;

        let now = OffsetDateTime::now_utc();
        let event = Event {
            id: tables.next_event_id,
            name: event.name,
            description: event.description,
            number_of_tickets: event.number_of_tickets,
            remaining_tickets: event.remaining_tickets,
            start_date_time: event.start_date_time,
            duration: event.duration,
            created_at: now,
            updated_at: now,
        };
        check_inventory(&event)?;
        tables.events.insert(event.id, event.clone());

        Ok(event)
    }

    async fn find_by_id(
        &self,
        transaction: &mut InMemoryTransaction,
        id: i64,
    ) -> Result<Option<Event>, Error> {
        Ok(transaction.staged.events.get(&id).cloned())
    }

    async fn find_by_id_for_update(
        &self,
        transaction: &mut InMemoryTransaction,
        id: i64,
    ) -> Result<Option<Event>, Error> {
        Ok(transaction.staged.events.get(&id).cloned())
    }

    async fn update(
        &self,
        transaction: &mut InMemoryTransaction,
        event: &Event,
    ) -> Result<Event, Error> {
        check_inventory(event)?;

        let stored = transaction
            .staged
            .events
            .get_mut(&event.id)
            .ok_or(Error::NoRowUpdated)?;
        *stored = Event {
            created_at: stored.created_at,
            updated_at: OffsetDateTime::now_utc(),
            ..event.clone()
        };

        Ok(stored.clone())
    }
}

#[async_trait]
impl TicketsRepository<InMemoryTransaction> for InMemoryDatabase {
    async fn insert(
        &self,
        transaction: &mut InMemoryTransaction,
        ticket: NewTicket,
    ) -> Result<Ticket, Error> {
        let tables = &mut transaction.staged;
        if !tables.events.contains_key(&ticket.event_id) {
            return Err(Error::ForeignKeyViolation("tickets_event_id_fkey".to_string()));
        }
        if ticket.quantity <= 0 {
            return Err(Error::CheckViolation("tickets_quantity_check".to_string()));
        }
        tables.next_ticket_id += 1;

        let now = OffsetDateTime::now_utc();
        let ticket = Ticket {
            id: tables.next_ticket_id,
            event_id: ticket.event_id,
            quantity: ticket.quantity,
            booked_at: ticket.booked_at,
            customer_name: ticket.customer_name,
            created_at: now,
            updated_at: now,
        };
        tables.tickets.insert(ticket.id, ticket.clone());

        Ok(ticket)
    }
}
