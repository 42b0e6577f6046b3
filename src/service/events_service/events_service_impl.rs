use super::EventsService;
use crate::{
    dto::{input, output},
    error::Error,
    model::NewEvent,
    repository::{EventsRepository, TransactionManager},
    service::transaction,
};
use axum::async_trait;
use std::sync::Arc;

pub struct EventsServiceImpl<M: TransactionManager> {
    transaction_manager: Arc<M>,
    repository: Arc<dyn EventsRepository<M::Transaction>>,
}

impl<M: TransactionManager> EventsServiceImpl<M> {
    pub fn new(
        transaction_manager: Arc<M>,
        repository: Arc<dyn EventsRepository<M::Transaction>>,
    ) -> Self {
        Self {
            transaction_manager,
            repository,
        }
    }

    fn validate_create_event(event: &input::Event) -> Result<(), Error> {
        if event.name.trim().is_empty() {
            return Err(Error::Validation("name must not be empty"));
        }
        if event.description.trim().is_empty() {
            return Err(Error::Validation("description must not be empty"));
        }
        if event.number_of_tickets <= 0 {
            return Err(Error::Validation("number_of_tickets must be greater than 0"));
        }
        if event.duration <= 0 {
            return Err(Error::Validation("duration must be greater than 0"));
        }

        Ok(())
    }
}

#[async_trait]
impl<M: TransactionManager> EventsService for EventsServiceImpl<M> {
    async fn create_event(&self, event: input::Event) -> Result<output::Event, Error> {
        tracing::info!("creating event");
        tracing::trace!(?event);

        Self::validate_create_event(&event)?;

        let new_event = NewEvent::new(
            event.name,
            event.description,
            event.number_of_tickets,
            event.start_date_time,
            event.duration,
        );

        let mut transaction = transaction::begin(self.transaction_manager.as_ref()).await?;
        let result = self
            .repository
            .insert(&mut transaction, new_event)
            .await
            .map_err(Error::from);
        let event = transaction::finish(self.transaction_manager.as_ref(), transaction, result)
            .await?;

        tracing::info!(id = event.id, "created event");

        Ok(event.into())
    }

    async fn find_event(&self, id: i64) -> Result<output::Event, Error> {
        tracing::info!(id, "finding event");

        let mut transaction = transaction::begin(self.transaction_manager.as_ref()).await?;
        let result = self
            .repository
            .find_by_id(&mut transaction, id)
            .await
            .map_err(Error::from)
            .and_then(|event| event.ok_or(Error::EventNotExist));
        let event = transaction::finish(self.transaction_manager.as_ref(), transaction, result)
            .await?;

        Ok(event.into())
    }
}
