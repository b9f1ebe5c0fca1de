//! Domain records for members, events and financial contributions.
//!
//! # Responsibility
//! - Define the canonical record and form-draft shapes per entity kind.
//! - Keep wire field names aligned with the dashboard form surface.
//!
//! # Invariants
//! - Every record is identified by a per-store sequential `RecordId`.
//! - Records are created only through store `add` after validation passes;
//!   no update/edit operation exists for any entity.

pub mod contribution;
pub mod event;
pub mod member;

/// Calendar-date format used by date form fields (`2023-01-15`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sequential per-store identifier.
///
/// Assigned as one more than the current maximum id (1 for an empty store).
/// Only safe under the single-owner mutation model this crate assumes.
pub type RecordId = u64;
