//! Events page facade.

use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::config::DashboardConfig;
use crate::load::{fetch_after_delay, sample};
use crate::model::event::{Event, EventDraft};
use crate::model::RecordId;
use crate::search::filter::filter_events;
use crate::store::event_store::EventStore;
use crate::store::Revision;
use crate::validate::ValidationReport;

pub struct EventService {
    store: EventStore,
    fetch_delay: Duration,
}

impl EventService {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            store: EventStore::new(),
            fetch_delay: config.fetch_delay(),
        }
    }

    /// Simulated startup fetch; `false` means the token was cancelled and
    /// the store is untouched.
    pub async fn load(&mut self, cancel: &CancellationToken) -> bool {
        match fetch_after_delay(self.fetch_delay, cancel, sample::sample_events).await {
            Some(events) => {
                self.store.load(events);
                true
            }
            None => false,
        }
    }

    /// Validated add; an accepted draft has its picture upload encoded as a
    /// data URI on the stored record.
    pub fn add(&mut self, draft: &EventDraft) -> Result<Event, ValidationReport> {
        self.store.add(draft)
    }

    /// Removes one event; silent no-op for unknown ids.
    pub fn remove(&mut self, id: RecordId) {
        self.store.remove(id);
    }

    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    /// Rows matching the listing search box.
    pub fn filtered(&self, query: &str) -> Vec<&Event> {
        filter_events(self.store.events(), query)
    }

    /// Store mutation notifications for the consuming view.
    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.store.subscribe()
    }
}
