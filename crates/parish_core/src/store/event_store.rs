//! Event record store.
//!
//! Same mutation contract as the other stores; `add` additionally encodes an
//! uploaded picture as an inline data URI on acceptance.

use log::{debug, info};
use tokio::sync::watch;

use crate::model::event::{Event, EventDraft, PictureUpload};
use crate::model::RecordId;
use crate::store::{next_record_id, ChangeSignal, Revision};
use crate::validate::{validate_event, ValidationReport};

/// In-memory ordered collection of events.
#[derive(Debug)]
pub struct EventStore {
    events: Vec<Event>,
    signal: ChangeSignal,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            signal: ChangeSignal::new(),
        }
    }

    /// Replaces the entire sequence. Startup fetch path; bypasses validation
    /// by contract.
    pub fn load(&mut self, events: Vec<Event>) {
        self.events = events;
        self.signal.bump();
        debug!(
            "event=events_loaded module=store status=ok count={}",
            self.events.len()
        );
    }

    /// Validates the draft and appends it with the next sequential id.
    ///
    /// The optional picture upload is encoded as a data URI only once the
    /// draft has passed validation.
    pub fn add(&mut self, draft: &EventDraft) -> Result<Event, ValidationReport> {
        let report = validate_event(draft);
        if !report.is_empty() {
            debug!(
                "event=event_rejected module=store status=invalid fields={}",
                report.len()
            );
            return Err(report);
        }

        let event = Event {
            id: next_record_id(self.events.iter().map(|event| event.id)),
            title: draft.title.clone(),
            description: draft.description.clone(),
            date: draft.date.clone(),
            location: draft.location.clone(),
            picture: draft.picture.as_ref().map(PictureUpload::to_data_uri),
        };
        self.events.push(event.clone());
        self.signal.bump();
        info!("event=event_added module=store status=ok id={}", event.id);
        Ok(event)
    }

    /// Removes the matching event. Silent no-op for unknown ids.
    pub fn remove(&mut self, id: RecordId) {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        if self.events.len() != before {
            self.signal.bump();
            info!("event=event_removed module=store status=ok id={id}");
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: RecordId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Subscribes to mutation notifications.
    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.signal.subscribe()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
