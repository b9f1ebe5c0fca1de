//! Member domain model.
//!
//! # Invariants
//! - `name` is unique case-insensitively within a store at insertion time.
//! - `date_of_registration` holds the raw `YYYY-MM-DD` form string; the
//!   validator enforces parseability and the not-after-tomorrow rule.

use serde::{Deserialize, Serialize};

use crate::model::RecordId;

/// Registered member of the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: RecordId,
    /// Letters and spaces only.
    pub name: String,
    pub email: String,
    /// Exactly 10 decimal digits.
    pub phone: String,
    /// Letters and spaces, optionally followed by trailing digits.
    pub location: String,
    /// Free-text role label (letters and spaces). The canonical set is
    /// Admin / Member / Moderator but other labels are accepted.
    pub role: String,
    #[serde(rename = "dateOfRegistration")]
    pub date_of_registration: String,
    pub password: String,
}

/// Candidate member as captured by the registration form.
///
/// All fields are raw strings; [`crate::validate::validate_member`] turns a
/// draft into per-field error messages before a store accepts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub role: String,
    pub date_of_registration: String,
    pub password: String,
}
