use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventsService: Send + Sync {
    ///
    /// Create new event with all tickets available.
    ///
    /// ### Returns
    /// Created event
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - name or description is empty
    ///     - number_of_tickets is not positive
    ///     - duration is not positive
    ///
    async fn create_event(&self, event: input::Event) -> Result<output::Event, Error>;

    ///
    /// Find event
    ///
    /// ### Errors
    /// - [Error::EventNotExist] when event with id does not exist
    ///
    async fn find_event(&self, id: i64) -> Result<output::Event, Error>;
}
