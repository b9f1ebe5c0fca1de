use parish_core::{Member, MemberDraft, MemberStore};

fn valid_draft(name: &str) -> MemberDraft {
    MemberDraft {
        name: name.to_string(),
        email: "someone@example.com".to_string(),
        phone: "0788123456".to_string(),
        location: "Kigali".to_string(),
        role: "Member".to_string(),
        date_of_registration: "2023-01-15".to_string(),
        password: "Sunday@10".to_string(),
    }
}

#[test]
fn add_assigns_sequential_ids_starting_at_one() {
    let mut store = MemberStore::new();

    let first = store.add(&valid_draft("John Doe")).unwrap();
    let second = store.add(&valid_draft("Jane Smith")).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(store.len(), 2);
}

#[test]
fn duplicate_name_is_rejected_case_insensitively_without_mutation() {
    let mut store = MemberStore::new();
    store.add(&valid_draft("john doe")).unwrap();

    let report = store.add(&valid_draft("John Doe")).unwrap_err();

    assert_eq!(
        report.message("name"),
        Some("A member with this name already exists.")
    );
    assert_eq!(store.len(), 1);
    assert_eq!(store.members()[0].name, "john doe");
}

#[test]
fn add_then_remove_restores_prior_content_but_not_the_id_counter() {
    let mut store = MemberStore::new();
    store.add(&valid_draft("John Doe")).unwrap();
    let before: Vec<_> = store.members().to_vec();

    let added = store.add(&valid_draft("Jane Smith")).unwrap();
    let pending = store.request_removal(added.id).unwrap();
    store.confirm_removal(pending);

    assert_eq!(store.members(), before.as_slice());

    // The id counter keeps moving forward: max+1 over what remains.
    let next = store.add(&valid_draft("Alice Johnson")).unwrap();
    assert_eq!(next.id, 2);
}

#[test]
fn removal_requires_confirmation_and_carries_the_member_name() {
    let mut store = MemberStore::new();
    let member = store.add(&valid_draft("John Doe")).unwrap();

    let pending = store.request_removal(member.id).unwrap();
    assert_eq!(pending.member_name, "John Doe");

    // Requesting alone never mutates; dropping the token cancels.
    assert_eq!(store.len(), 1);
    drop(pending);
    assert_eq!(store.len(), 1);

    let pending = store.request_removal(member.id).unwrap();
    store.confirm_removal(pending);
    assert!(store.is_empty());
}

#[test]
fn removal_of_unknown_id_is_a_silent_no_op() {
    let mut store = MemberStore::new();
    store.add(&valid_draft("John Doe")).unwrap();

    assert!(store.request_removal(999).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn failed_add_reports_every_failing_field_and_leaves_store_unchanged() {
    let mut store = MemberStore::new();

    let report = store.add(&MemberDraft::default()).unwrap_err();

    for field in [
        "name",
        "email",
        "phone",
        "location",
        "role",
        "dateOfRegistration",
        "password",
    ] {
        assert!(report.message(field).is_some(), "missing error for {field}");
    }
    assert!(store.is_empty());
}

#[test]
fn load_replaces_the_whole_sequence() {
    let mut store = MemberStore::new();
    store.add(&valid_draft("John Doe")).unwrap();

    let replacement: Vec<Member> = ["Jane Smith", "Alice Johnson"]
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let draft = valid_draft(name);
            Member {
                id: index as u64 + 1,
                name: draft.name,
                email: draft.email,
                phone: draft.phone,
                location: draft.location,
                role: draft.role,
                date_of_registration: draft.date_of_registration,
                password: draft.password,
            }
        })
        .collect();
    store.load(replacement);

    assert_eq!(store.len(), 2);
    assert!(store.members().iter().all(|m| m.name != "John Doe"));
}
