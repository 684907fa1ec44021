//! Event storage access.

use std::sync::Mutex;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use crate::db::Connection;
use crate::models::{Event, EventSummary, EVENTS_COLLECTION};
use crate::{Error, Result};

/// Which events a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    All,
    ActiveOnly,
}

impl EventFilter {
    fn to_document(self) -> Document {
        match self {
            EventFilter::All => doc! {},
            EventFilter::ActiveOnly => doc! { "isActive": true },
        }
    }
}

/// Read and write access to stored events.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find one event by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Event>>;

    /// List events in insertion order, projected to summary fields.
    async fn list_summaries(&self, filter: EventFilter) -> Result<Vec<EventSummary>>;

    /// Persist the whole event document back, replacing the stored one.
    async fn save(&self, event: &Event) -> Result<()>;
}

/// [`EventRepository`] backed by the `events` collection.
pub struct MongoEventRepository {
    events: Collection<Event>,
}

impl MongoEventRepository {
    pub fn new(conn: &Connection) -> Self {
        Self {
            events: conn.database().collection(EVENTS_COLLECTION),
        }
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Event>> {
        Ok(self.events.find_one(doc! { "name": name }).await?)
    }

    async fn list_summaries(&self, filter: EventFilter) -> Result<Vec<EventSummary>> {
        let cursor = self
            .events
            .clone_with_type::<EventSummary>()
            .find(filter.to_document())
            .projection(doc! { "_id": 0, "name": 1, "department": 1, "isActive": 1, "image": 1 })
            .await?;
        Ok(cursor.try_collect::<Vec<_>>().await?)
    }

    async fn save(&self, event: &Event) -> Result<()> {
        let id = event
            .id
            .ok_or_else(|| Error::Validation(format!("event '{}' has no _id", event.name)))?;
        let result = self.events.replace_one(doc! { "_id": id }, event).await?;
        if result.matched_count == 0 {
            return Err(Error::NotFound(format!("event with _id {}", id)));
        }
        Ok(())
    }
}

/// In-process [`EventRepository`] for tests.
#[derive(Default)]
pub struct InMemoryEventRepository {
    events: Mutex<Vec<Event>>,
    writes: Mutex<usize>,
}

impl InMemoryEventRepository {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            writes: Mutex::new(0),
        }
    }

    /// Number of successful [`EventRepository::save`] calls.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn snapshot(&self) -> Vec<Event> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Event>> {
        let events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        Ok(events.iter().find(|e| e.name == name).cloned())
    }

    async fn list_summaries(&self, filter: EventFilter) -> Result<Vec<EventSummary>> {
        let events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        Ok(events
            .iter()
            .filter(|e| filter == EventFilter::All || e.is_active)
            .map(EventSummary::from)
            .collect())
    }

    async fn save(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        let slot = events
            .iter_mut()
            .find(|e| e.id.is_some() && e.id == event.id)
            .ok_or_else(|| Error::NotFound(format!("event '{}'", event.name)))?;
        *slot = event.clone();
        *self.writes.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}
