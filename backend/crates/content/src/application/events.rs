//! Events Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::EventId;

use crate::domain::entities::Event;
use crate::domain::repository::EventRepository;
use crate::domain::value_objects::EventDraft;
use crate::error::{ContentError, ContentResult};

pub struct EventsUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> EventsUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All events, or only those not finished by `upcoming_from`
    pub async fn list(&self, upcoming_from: Option<DateTime<Utc>>) -> ContentResult<Vec<Event>> {
        self.repo.list_events(upcoming_from).await
    }

    pub async fn get(&self, id: &EventId) -> ContentResult<Event> {
        self.repo
            .find_event(id)
            .await?
            .ok_or(ContentError::NotFound("Event"))
    }

    pub async fn create(&self, draft: EventDraft) -> ContentResult<Event> {
        let event = Event::new(draft.validated()?);
        self.repo.create_event(&event).await?;

        tracing::info!(event_id = %event.id, starts_at = %event.starts_at, "Event created");
        Ok(event)
    }

    pub async fn update(&self, id: &EventId, draft: EventDraft) -> ContentResult<Event> {
        let draft = draft.validated()?;
        let mut event = self.get(id).await?;
        event.apply(draft);
        self.repo.update_event(&event).await?;

        tracing::info!(event_id = %event.id, "Event updated");
        Ok(event)
    }

    pub async fn delete(&self, id: &EventId) -> ContentResult<()> {
        if !self.repo.delete_event(id).await? {
            return Err(ContentError::NotFound("Event"));
        }
        tracing::info!(event_id = %id, "Event deleted");
        Ok(())
    }
}
