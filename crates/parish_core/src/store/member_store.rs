//! Member record store.
//!
//! # Responsibility
//! - Hold the ordered member sequence and apply load/add/removal mutations.
//! - Enforce the member validation rules (including case-insensitive name
//!   uniqueness) on every `add`.
//!
//! # Invariants
//! - Removal is two-step: a [`PendingRemoval`] token must be confirmed before
//!   the sequence changes; dropping the token cancels the removal.
//! - A failed `add` returns the full report and leaves the store unchanged.

use log::{debug, info};
use tokio::sync::watch;

use crate::model::member::{Member, MemberDraft};
use crate::model::RecordId;
use crate::store::{next_record_id, ChangeSignal, Revision};
use crate::validate::{validate_member, ValidationReport};

/// In-memory ordered collection of members.
#[derive(Debug)]
pub struct MemberStore {
    members: Vec<Member>,
    signal: ChangeSignal,
}

/// Confirmation token for a requested member removal.
///
/// Carries the member's name for the confirmation prompt. Passing the token
/// to [`MemberStore::confirm_removal`] applies the removal; dropping it
/// cancels with no side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub member_id: RecordId,
    pub member_name: String,
}

impl MemberStore {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            signal: ChangeSignal::new(),
        }
    }

    /// Replaces the entire sequence. Startup fetch path; bypasses validation
    /// by contract.
    pub fn load(&mut self, members: Vec<Member>) {
        self.members = members;
        self.signal.bump();
        debug!(
            "event=members_loaded module=store status=ok count={}",
            self.members.len()
        );
    }

    /// Validates the draft and appends it with the next sequential id.
    ///
    /// On failure returns the field -> message report and leaves the store
    /// unchanged.
    pub fn add(&mut self, draft: &MemberDraft) -> Result<Member, ValidationReport> {
        let report = validate_member(draft, &self.members);
        if !report.is_empty() {
            debug!(
                "event=member_rejected module=store status=invalid fields={}",
                report.len()
            );
            return Err(report);
        }

        let member = Member {
            id: next_record_id(self.members.iter().map(|member| member.id)),
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            location: draft.location.clone(),
            role: draft.role.clone(),
            date_of_registration: draft.date_of_registration.clone(),
            password: draft.password.clone(),
        };
        self.members.push(member.clone());
        self.signal.bump();
        info!("event=member_added module=store status=ok id={}", member.id);
        Ok(member)
    }

    /// Starts the removal flow for one member.
    ///
    /// Returns `None` when the id does not exist (nothing to confirm).
    pub fn request_removal(&self, id: RecordId) -> Option<PendingRemoval> {
        self.members
            .iter()
            .find(|member| member.id == id)
            .map(|member| PendingRemoval {
                member_id: member.id,
                member_name: member.name.clone(),
            })
    }

    /// Applies a confirmed removal. Silent no-op when the member is already
    /// gone.
    pub fn confirm_removal(&mut self, pending: PendingRemoval) {
        let before = self.members.len();
        self.members.retain(|member| member.id != pending.member_id);
        if self.members.len() != before {
            self.signal.bump();
            info!(
                "event=member_removed module=store status=ok id={}",
                pending.member_id
            );
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn get(&self, id: RecordId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Subscribes to mutation notifications.
    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.signal.subscribe()
    }
}

impl Default for MemberStore {
    fn default() -> Self {
        Self::new()
    }
}
