//! Contribution record store.

use log::{debug, info};
use tokio::sync::watch;

use crate::model::contribution::{Contribution, ContributionDraft};
use crate::model::RecordId;
use crate::store::{next_record_id, ChangeSignal, Revision};
use crate::validate::{validate_contribution, ValidationReport};

/// In-memory ordered collection of contributions.
#[derive(Debug)]
pub struct ContributionStore {
    contributions: Vec<Contribution>,
    signal: ChangeSignal,
}

impl ContributionStore {
    pub fn new() -> Self {
        Self {
            contributions: Vec::new(),
            signal: ChangeSignal::new(),
        }
    }

    /// Replaces the entire sequence. Startup fetch path; bypasses validation
    /// by contract.
    pub fn load(&mut self, contributions: Vec<Contribution>) {
        self.contributions = contributions;
        self.signal.bump();
        debug!(
            "event=contributions_loaded module=store status=ok count={}",
            self.contributions.len()
        );
    }

    /// Validates the draft and appends it with the next sequential id.
    pub fn add(&mut self, draft: &ContributionDraft) -> Result<Contribution, ValidationReport> {
        let report = validate_contribution(draft);
        if !report.is_empty() {
            debug!(
                "event=contribution_rejected module=store status=invalid fields={}",
                report.len()
            );
            return Err(report);
        }

        let contribution = Contribution {
            id: next_record_id(self.contributions.iter().map(|c| c.id)),
            member_name: draft.member_name.clone(),
            amount: draft.amount.clone(),
            date: draft.date.clone(),
        };
        self.contributions.push(contribution.clone());
        self.signal.bump();
        info!(
            "event=contribution_added module=store status=ok id={}",
            contribution.id
        );
        Ok(contribution)
    }

    /// Removes the matching contribution. Silent no-op for unknown ids.
    pub fn remove(&mut self, id: RecordId) {
        let before = self.contributions.len();
        self.contributions.retain(|c| c.id != id);
        if self.contributions.len() != before {
            self.signal.bump();
            info!("event=contribution_removed module=store status=ok id={id}");
        }
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn get(&self, id: RecordId) -> Option<&Contribution> {
        self.contributions.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    /// Subscribes to mutation notifications.
    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.signal.subscribe()
    }
}

impl Default for ContributionStore {
    fn default() -> Self {
        Self::new()
    }
}
