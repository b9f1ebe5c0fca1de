//! Core domain logic for the parish management dashboard.
//! This crate is the single source of truth for validation, record-store and
//! reporting rules; UI shells consume it without re-implementing any of them.

pub mod config;
pub mod load;
pub mod logging;
pub mod model;
pub mod report;
pub mod search;
pub mod service;
pub mod store;
pub mod validate;

pub use config::{ColorScheme, DashboardConfig, NavEntry};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contribution::{Contribution, ContributionDraft};
pub use model::event::{Event, EventDraft, PictureUpload};
pub use model::member::{Member, MemberDraft};
pub use model::RecordId;
pub use report::{
    goal_progress, location_distribution, monthly_trend, role_distribution, summarize,
    total_contributions, DashboardSummary, LocationCount, MonthlyTotal, RoleCount,
};
pub use search::filter::{
    filter_contributions, filter_events, filter_members, paginate, PageRequest,
};
pub use service::{ContributionService, EventService, MemberService};
pub use store::contribution_store::ContributionStore;
pub use store::event_store::EventStore;
pub use store::member_store::{MemberStore, PendingRemoval};
pub use store::Revision;
pub use validate::{
    validate_contribution, validate_event, validate_member, validate_member_at, ValidationReport,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
