//! Financial contribution domain model.
//!
//! Amounts and dates stay as the raw strings the form supplied: the
//! validator guarantees a parseable amount at insertion time, but loaded
//! sample data may carry anything, so reporting re-parses defensively.

use serde::{Deserialize, Serialize};

use crate::model::RecordId;

/// Single financial contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: RecordId,
    #[serde(rename = "memberName")]
    pub member_name: String,
    /// Decimal amount as entered; must parse as a finite number to pass
    /// validation.
    pub amount: String,
    /// Required; no format constraint beyond presence.
    pub date: String,
}

/// Candidate contribution as captured by the add-contribution form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionDraft {
    pub member_name: String,
    pub amount: String,
    pub date: String,
}
