//! In-memory record stores, one per entity kind.
//!
//! # Responsibility
//! - Hold the ordered record sequence and apply load/add/remove mutations.
//! - Enforce the entity's validation rules on every `add`.
//! - Publish a revision bump after each mutation so views can pull fresh
//!   aggregates instead of relying on implicit re-render.
//!
//! # Invariants
//! - A failed `add` leaves the sequence untouched and returns the full
//!   field -> message report.
//! - `remove` with an unknown id is a silent no-op.
//! - Stores are single-owner values; there is no locking and no concurrent
//!   interleaving to defend against.

pub mod contribution_store;
pub mod event_store;
pub mod member_store;

use tokio::sync::watch;

use crate::model::RecordId;

/// Monotonic counter published by a store after every mutation.
pub type Revision = u64;

/// Next sequential id: one more than the current maximum, or 1 when empty.
pub(crate) fn next_record_id(ids: impl Iterator<Item = RecordId>) -> RecordId {
    ids.max().map_or(1, |max| max + 1)
}

/// Change-notification handle owned by each store.
#[derive(Debug)]
pub(crate) struct ChangeSignal {
    tx: watch::Sender<Revision>,
}

impl ChangeSignal {
    pub(crate) fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Publishes one revision increment to all subscribers.
    pub(crate) fn bump(&self) {
        self.tx.send_modify(|revision| *revision += 1);
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Revision> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::next_record_id;

    #[test]
    fn next_record_id_is_one_for_empty_store() {
        assert_eq!(next_record_id(std::iter::empty()), 1);
    }

    #[test]
    fn next_record_id_is_max_plus_one_even_with_gaps() {
        assert_eq!(next_record_id([1, 7, 3].into_iter()), 8);
    }
}
