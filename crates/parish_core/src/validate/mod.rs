//! Field validation rules for form submissions.
//!
//! # Responsibility
//! - Map a candidate record (and, for members, the existing collection) to a
//!   field-name -> message report; an empty report means acceptable.
//! - Keep every rule pure; the member-name uniqueness check is the only read
//!   of external state.
//!
//! # Invariants
//! - All fields of a submission are checked independently; one failing field
//!   never short-circuits the others.
//! - Validators never mutate anything; the caller decides what to do with a
//!   non-empty report.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use chrono::{Days, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::contribution::ContributionDraft;
use crate::model::event::EventDraft;
use crate::model::member::{Member, MemberDraft};
use crate::model::DATE_FORMAT;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid name regex"));
static MEMBER_LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+\d*$").expect("valid location regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").expect("valid phone regex"));

/// Symbols accepted by the password strength rule.
pub const PASSWORD_SYMBOLS: [char; 7] = ['@', '$', '!', '%', '*', '?', '&'];
const MIN_PASSWORD_CHARS: usize = 8;

/// Field-name -> message map produced by a validation pass.
///
/// Keys are the form field names of the originating surface
/// (`dateOfRegistration`, `memberName`, ...). Ordered for deterministic
/// display and comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationReport {
    /// True when every field passed, i.e. the submission is acceptable.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message recorded for one field, if it failed.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, &'static str, String> {
        self.errors.iter()
    }

    fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validates a member registration against the current member collection.
///
/// The registration-date rule is evaluated against the local clock; use
/// [`validate_member_at`] to pin "today" in tests.
pub fn validate_member(draft: &MemberDraft, existing: &[Member]) -> ValidationReport {
    validate_member_at(draft, existing, Local::now().date_naive())
}

/// Validates a member registration with an explicit "today".
pub fn validate_member_at(
    draft: &MemberDraft,
    existing: &[Member],
    today: NaiveDate,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.name.is_empty() {
        report.reject("name", "Name is required.");
    } else if !NAME_RE.is_match(&draft.name) {
        report.reject("name", "Name can only contain letters and spaces.");
    } else if existing
        .iter()
        .any(|member| member.name.eq_ignore_ascii_case(&draft.name))
    {
        report.reject("name", "A member with this name already exists.");
    }

    if draft.email.is_empty() {
        report.reject("email", "Email is required.");
    } else if !EMAIL_RE.is_match(&draft.email) {
        report.reject("email", "Enter a valid email address.");
    }

    if draft.phone.is_empty() {
        report.reject("phone", "Phone number is required.");
    } else if !PHONE_RE.is_match(&draft.phone) {
        report.reject("phone", "Phone number must be exactly 10 digits.");
    }

    if draft.location.is_empty() {
        report.reject("location", "Location is required.");
    } else if !MEMBER_LOCATION_RE.is_match(&draft.location) {
        report.reject(
            "location",
            "Location must be letters and spaces, optionally followed by digits.",
        );
    }

    if draft.role.is_empty() {
        report.reject("role", "Role is required.");
    } else if !NAME_RE.is_match(&draft.role) {
        report.reject("role", "Role can only contain letters and spaces.");
    }

    if draft.date_of_registration.is_empty() {
        report.reject("dateOfRegistration", "Date of registration is required.");
    } else {
        match NaiveDate::parse_from_str(&draft.date_of_registration, DATE_FORMAT) {
            Ok(date) => {
                let tomorrow = today + Days::new(1);
                if date > tomorrow {
                    report.reject(
                        "dateOfRegistration",
                        "Date of registration cannot be later than tomorrow.",
                    );
                }
            }
            Err(_) => report.reject(
                "dateOfRegistration",
                "Date of registration must be a valid date (YYYY-MM-DD).",
            ),
        }
    }

    if draft.password.is_empty() {
        report.reject("password", "Password is required.");
    } else if !password_is_strong(&draft.password) {
        report.reject(
            "password",
            "Password must be at least 8 characters and include an uppercase letter, \
             a number, and a special character (@$!%*?&).",
        );
    }

    report
}

/// Validates an event submission.
pub fn validate_event(draft: &EventDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.title.is_empty() {
        report.reject("title", "Title is required.");
    } else if !NAME_RE.is_match(&draft.title) {
        report.reject("title", "Title can only contain letters and spaces.");
    }

    if draft.description.is_empty() {
        report.reject("description", "Description is required.");
    }

    if draft.date.is_empty() {
        report.reject("date", "Date is required.");
    }

    if draft.location.is_empty() {
        report.reject("location", "Location is required.");
    } else if !NAME_RE.is_match(&draft.location) {
        report.reject("location", "Location can only contain letters and spaces.");
    }

    report
}

/// Validates a contribution submission.
pub fn validate_contribution(draft: &ContributionDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.member_name.is_empty() {
        report.reject("memberName", "Member name is required.");
    }

    if draft.amount.is_empty() || !amount_is_numeric(&draft.amount) {
        report.reject("amount", "Valid amount is required.");
    }

    if draft.date.is_empty() {
        report.reject("date", "Date is required.");
    }

    report
}

/// True when the raw amount parses as a finite number.
pub(crate) fn amount_is_numeric(raw: &str) -> bool {
    matches!(raw.trim().parse::<f64>(), Ok(value) if value.is_finite())
}

fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(&c))
}
