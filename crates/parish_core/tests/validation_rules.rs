use chrono::NaiveDate;
use parish_core::{
    validate_contribution, validate_event, validate_member, validate_member_at, ContributionDraft,
    EventDraft, MemberDraft,
};

fn valid_member_draft() -> MemberDraft {
    MemberDraft {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "0788123456".to_string(),
        location: "Kigali".to_string(),
        role: "Admin".to_string(),
        date_of_registration: "2023-01-15".to_string(),
        password: "Sunday@10".to_string(),
    }
}

#[test]
fn a_fully_valid_member_draft_produces_an_empty_report() {
    let report = validate_member(&valid_member_draft(), &[]);
    assert!(report.is_empty(), "unexpected errors: {report}");
}

#[test]
fn phone_must_be_exactly_ten_digits() {
    for phone in ["123", "12345678901", "123-456-7890", "12345abcde", "07881 3456"] {
        let draft = MemberDraft {
            phone: phone.to_string(),
            ..valid_member_draft()
        };
        let report = validate_member(&draft, &[]);
        assert_eq!(
            report.message("phone"),
            Some("Phone number must be exactly 10 digits."),
            "phone `{phone}` should be rejected"
        );
    }
}

#[test]
fn weak_passwords_fail_with_the_password_error() {
    // Missing uppercase, missing digit, missing symbol, too short.
    for password in ["sunday@10", "Sunday@ten", "Sunday100", "Su@1"] {
        let draft = MemberDraft {
            password: password.to_string(),
            ..valid_member_draft()
        };
        let report = validate_member(&draft, &[]);
        assert!(
            report.message("password").is_some(),
            "password `{password}` should be rejected"
        );
    }
}

#[test]
fn name_and_role_reject_digits_and_punctuation() {
    let draft = MemberDraft {
        name: "John Doe 2".to_string(),
        role: "Admin!".to_string(),
        ..valid_member_draft()
    };
    let report = validate_member(&draft, &[]);
    assert_eq!(
        report.message("name"),
        Some("Name can only contain letters and spaces.")
    );
    assert_eq!(
        report.message("role"),
        Some("Role can only contain letters and spaces.")
    );
}

#[test]
fn member_location_allows_trailing_digits_but_not_leading_ones() {
    let accepted = MemberDraft {
        location: "Sector 12".to_string(),
        ..valid_member_draft()
    };
    assert!(validate_member(&accepted, &[]).message("location").is_none());

    let rejected = MemberDraft {
        location: "12 Sector".to_string(),
        ..valid_member_draft()
    };
    assert!(validate_member(&rejected, &[]).message("location").is_some());
}

#[test]
fn registration_date_may_be_tomorrow_but_not_later() {
    let today = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();

    let tomorrow = MemberDraft {
        date_of_registration: "2023-06-16".to_string(),
        ..valid_member_draft()
    };
    assert!(validate_member_at(&tomorrow, &[], today)
        .message("dateOfRegistration")
        .is_none());

    let day_after = MemberDraft {
        date_of_registration: "2023-06-17".to_string(),
        ..valid_member_draft()
    };
    assert_eq!(
        validate_member_at(&day_after, &[], today).message("dateOfRegistration"),
        Some("Date of registration cannot be later than tomorrow.")
    );

    let garbage = MemberDraft {
        date_of_registration: "15/06/2023".to_string(),
        ..valid_member_draft()
    };
    assert_eq!(
        validate_member_at(&garbage, &[], today).message("dateOfRegistration"),
        Some("Date of registration must be a valid date (YYYY-MM-DD).")
    );
}

#[test]
fn all_member_fields_are_checked_independently() {
    let report = validate_member(&MemberDraft::default(), &[]);
    assert_eq!(report.len(), 7);
}

#[test]
fn event_rules_follow_the_form_messages() {
    let report = validate_event(&EventDraft::default());
    assert_eq!(report.message("title"), Some("Title is required."));
    assert_eq!(
        report.message("description"),
        Some("Description is required.")
    );
    assert_eq!(report.message("date"), Some("Date is required."));
    assert_eq!(report.message("location"), Some("Location is required."));

    let report = validate_event(&EventDraft {
        title: "Charity Run 2023".to_string(),
        description: "A charity run to raise funds.".to_string(),
        date: "2023-04-10".to_string(),
        location: "City Park".to_string(),
        picture: None,
    });
    assert_eq!(
        report.message("title"),
        Some("Title can only contain letters and spaces.")
    );
    assert_eq!(report.len(), 1);
}

#[test]
fn contribution_amount_must_parse_as_a_finite_number() {
    let base = ContributionDraft {
        member_name: "John Doe".to_string(),
        amount: "100".to_string(),
        date: "2023-01-05".to_string(),
    };
    assert!(validate_contribution(&base).is_empty());

    for amount in ["", "ten", "NaN", "inf"] {
        let draft = ContributionDraft {
            amount: amount.to_string(),
            ..base.clone()
        };
        assert_eq!(
            validate_contribution(&draft).message("amount"),
            Some("Valid amount is required."),
            "amount `{amount}` should be rejected"
        );
    }
}
