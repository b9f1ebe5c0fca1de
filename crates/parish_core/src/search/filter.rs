//! Substring filters and page slicing for the tabular listing views.
//!
//! # Invariants
//! - Matching is case-insensitive on text fields; the phone field matches on
//!   the raw digits as typed.
//! - An empty query matches every row.
//! - Filters never mutate or reorder the underlying sequence.

use crate::model::contribution::Contribution;
use crate::model::event::Event;
use crate::model::member::Member;

/// One page of a listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: usize,
    pub rows_per_page: usize,
}

/// Members whose name, email, location or role contains the query
/// (case-insensitive), or whose phone contains it verbatim.
pub fn filter_members<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let needle = query.to_lowercase();
    members
        .iter()
        .filter(|member| {
            member.name.to_lowercase().contains(&needle)
                || member.email.to_lowercase().contains(&needle)
                || member.phone.contains(query)
                || member.location.to_lowercase().contains(&needle)
                || member.role.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Events whose title, description, location or date contains the query
/// (case-insensitive).
pub fn filter_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let needle = query.to_lowercase();
    events
        .iter()
        .filter(|event| {
            event.title.to_lowercase().contains(&needle)
                || event.description.to_lowercase().contains(&needle)
                || event.location.to_lowercase().contains(&needle)
                || event.date.contains(query)
        })
        .collect()
}

/// Contributions whose member name, amount or date contains the query.
pub fn filter_contributions<'a>(
    contributions: &'a [Contribution],
    query: &str,
) -> Vec<&'a Contribution> {
    let needle = query.to_lowercase();
    contributions
        .iter()
        .filter(|contribution| {
            contribution.member_name.to_lowercase().contains(&needle)
                || contribution.amount.contains(query)
                || contribution.date.contains(query)
        })
        .collect()
}

/// Slice of `rows` covering one page; out-of-range pages yield an empty
/// slice.
pub fn paginate<T>(rows: &[T], request: PageRequest) -> &[T] {
    if request.rows_per_page == 0 {
        return &[];
    }
    let start = request
        .page
        .saturating_mul(request.rows_per_page)
        .min(rows.len());
    let end = start.saturating_add(request.rows_per_page).min(rows.len());
    &rows[start..end]
}
