//! Contributions page facade.
//!
//! Besides the usual load/add/remove/filter surface this service exposes the
//! derived reads the page charts from: running total, monthly trend and
//! progress against the configured fundraising goal.

use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::config::DashboardConfig;
use crate::load::{fetch_after_delay, sample};
use crate::model::contribution::{Contribution, ContributionDraft};
use crate::model::RecordId;
use crate::report::{goal_progress, monthly_trend, total_contributions, MonthlyTotal};
use crate::search::filter::filter_contributions;
use crate::store::contribution_store::ContributionStore;
use crate::store::Revision;
use crate::validate::ValidationReport;

pub struct ContributionService {
    store: ContributionStore,
    fetch_delay: Duration,
    goal: f64,
}

impl ContributionService {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            store: ContributionStore::new(),
            fetch_delay: config.fetch_delay(),
            goal: config.contribution_goal,
        }
    }

    /// Simulated startup fetch; `false` means the token was cancelled and
    /// the store is untouched.
    pub async fn load(&mut self, cancel: &CancellationToken) -> bool {
        let produce = || sample::sample_contributions(sample::SAMPLE_CONTRIBUTION_COUNT);
        match fetch_after_delay(self.fetch_delay, cancel, produce).await {
            Some(contributions) => {
                self.store.load(contributions);
                true
            }
            None => false,
        }
    }

    pub fn add(&mut self, draft: &ContributionDraft) -> Result<Contribution, ValidationReport> {
        self.store.add(draft)
    }

    /// Removes one contribution; silent no-op for unknown ids.
    pub fn remove(&mut self, id: RecordId) {
        self.store.remove(id);
    }

    pub fn contributions(&self) -> &[Contribution] {
        self.store.contributions()
    }

    /// Rows matching the listing search box.
    pub fn filtered(&self, query: &str) -> Vec<&Contribution> {
        filter_contributions(self.store.contributions(), query)
    }

    /// Sum of all amounts, recomputed per call.
    pub fn total(&self) -> f64 {
        total_contributions(self.store.contributions())
    }

    /// Month-by-month totals in first-encounter order.
    pub fn trend(&self) -> Vec<MonthlyTotal> {
        monthly_trend(self.store.contributions())
    }

    /// Percentage of the configured goal raised so far; may exceed 100.
    pub fn progress(&self) -> f64 {
        goal_progress(self.total(), self.goal)
    }

    /// Store mutation notifications for the consuming view.
    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.store.subscribe()
    }
}
