//! Members page facade.
//!
//! # Responsibility
//! - Cancellable startup load of the seed member list.
//! - Validated add, two-step removal, filtered listing.

use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::config::DashboardConfig;
use crate::load::{fetch_after_delay, sample};
use crate::model::member::{Member, MemberDraft};
use crate::model::RecordId;
use crate::search::filter::filter_members;
use crate::store::member_store::{MemberStore, PendingRemoval};
use crate::store::Revision;
use crate::validate::ValidationReport;

pub struct MemberService {
    store: MemberStore,
    fetch_delay: Duration,
}

impl MemberService {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            store: MemberStore::new(),
            fetch_delay: config.fetch_delay(),
        }
    }

    /// Simulated startup fetch. Returns `false` when the view was torn down
    /// (token cancelled) before the delay elapsed; the store is untouched in
    /// that case.
    pub async fn load(&mut self, cancel: &CancellationToken) -> bool {
        match fetch_after_delay(self.fetch_delay, cancel, sample::sample_members).await {
            Some(members) => {
                self.store.load(members);
                true
            }
            None => false,
        }
    }

    /// Validated add; success appends and clears the way for a form reset,
    /// failure hands back the per-field messages for inline display.
    pub fn add(&mut self, draft: &MemberDraft) -> Result<Member, ValidationReport> {
        self.store.add(draft)
    }

    /// Opens the delete-confirmation flow for one member.
    pub fn request_removal(&self, id: RecordId) -> Option<PendingRemoval> {
        self.store.request_removal(id)
    }

    /// Applies a confirmed removal.
    pub fn confirm_removal(&mut self, pending: PendingRemoval) {
        self.store.confirm_removal(pending);
    }

    pub fn members(&self) -> &[Member] {
        self.store.members()
    }

    /// Rows matching the listing search box.
    pub fn filtered(&self, query: &str) -> Vec<&Member> {
        filter_members(self.store.members(), query)
    }

    /// Store mutation notifications for the consuming view.
    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.store.subscribe()
    }
}
