//! Derived reporting views over store contents.
//!
//! # Responsibility
//! - Compute summary numbers and grouped chart series from the current
//!   records.
//!
//! # Invariants
//! - Every function is pure and recomputed per call; no caching, no
//!   incremental update.
//! - Unparseable contribution amounts count as zero; a contribution whose
//!   date is not `YYYY-MM-DD` is skipped by the monthly trend but still
//!   contributes to the total.

use chrono::NaiveDate;

use crate::model::contribution::Contribution;
use crate::model::event::Event;
use crate::model::member::Member;
use crate::model::DATE_FORMAT;

/// Roles that always appear in the role distribution, in display order.
pub const CANONICAL_ROLES: [&str; 3] = ["Admin", "Member", "Moderator"];

/// One point of the monthly contribution trend.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// English month name ("January", ...).
    pub month: String,
    pub total: f64,
}

/// Member count for one role label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCount {
    pub role: String,
    pub count: usize,
}

/// Member count for one exact location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

/// Headline numbers for the dashboard home card.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub members: usize,
    pub events: usize,
    pub contributions_total: f64,
}

/// Sum of all contribution amounts; unparseable values count as zero.
pub fn total_contributions(contributions: &[Contribution]) -> f64 {
    contributions.iter().map(|c| parsed_amount(&c.amount)).sum()
}

/// Groups contributions by calendar month name, in first-encounter order.
///
/// Rows whose date does not parse as `YYYY-MM-DD` are skipped.
pub fn monthly_trend(contributions: &[Contribution]) -> Vec<MonthlyTotal> {
    let mut series: Vec<MonthlyTotal> = Vec::new();
    for contribution in contributions {
        let Ok(date) = NaiveDate::parse_from_str(contribution.date.trim(), DATE_FORMAT) else {
            continue;
        };
        let month = date.format("%B").to_string();
        let amount = parsed_amount(&contribution.amount);
        match series.iter_mut().find(|point| point.month == month) {
            Some(point) => point.total += amount,
            None => series.push(MonthlyTotal {
                month,
                total: amount,
            }),
        }
    }
    series
}

/// Member count per role.
///
/// The canonical roles are always present (zero-filled, fixed order); any
/// other role label gets its own bucket in first-encounter order, so no
/// member is dropped from the chart.
pub fn role_distribution(members: &[Member]) -> Vec<RoleCount> {
    let mut counts: Vec<RoleCount> = CANONICAL_ROLES
        .iter()
        .map(|role| RoleCount {
            role: (*role).to_string(),
            count: 0,
        })
        .collect();
    for member in members {
        match counts.iter_mut().find(|entry| entry.role == member.role) {
            Some(entry) => entry.count += 1,
            None => counts.push(RoleCount {
                role: member.role.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// Member count per exact location string, in first-encounter order.
pub fn location_distribution(members: &[Member]) -> Vec<LocationCount> {
    let mut counts: Vec<LocationCount> = Vec::new();
    for member in members {
        match counts
            .iter_mut()
            .find(|entry| entry.location == member.location)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(LocationCount {
                location: member.location.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// Total contributions as a percentage of the goal. Not clamped; exceeding
/// the goal yields more than 100. A non-positive goal yields 0.
pub fn goal_progress(total: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        total / goal * 100.0
    } else {
        0.0
    }
}

/// Headline counts and totals for the home card.
pub fn summarize(
    members: &[Member],
    events: &[Event],
    contributions: &[Contribution],
) -> DashboardSummary {
    DashboardSummary {
        members: members.len(),
        events: events.len(),
        contributions_total: total_contributions(contributions),
    }
}

fn parsed_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
