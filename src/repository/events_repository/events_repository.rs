use crate::{
    model::{Event, NewEvent},
    repository,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventsRepository<T: Send + Sync + 'static>: Send + Sync {
    ///
    /// Inserts new event.
    ///
    /// ### Returns
    /// Stored event with generated id and timestamps
    ///
    /// ### Errors
    /// - [repository::Error::CheckViolation] when inventory is out of range
    ///
    async fn insert(&self, transaction: &mut T, event: NewEvent)
        -> Result<Event, repository::Error>;

    ///
    /// Finds event without locking it
    ///
    async fn find_by_id(&self, transaction: &mut T, id: i64)
        -> Result<Option<Event>, repository::Error>;

    ///
    /// Finds event and locks its row until the transaction ends.
    /// Concurrent callers locking the same event wait for each other.
    ///
    async fn find_by_id_for_update(
        &self,
        transaction: &mut T,
        id: i64,
    ) -> Result<Option<Event>, repository::Error>;

    ///
    /// Overwrites all mutable columns of the event and bumps updated_at.
    ///
    /// ### Errors
    /// - [repository::Error::NoRowUpdated] when event does not exist
    /// - [repository::Error::CheckViolation] when inventory is out of range
    ///
    async fn update(&self, transaction: &mut T, event: &Event)
        -> Result<Event, repository::Error>;
}
