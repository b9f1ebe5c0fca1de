use parish_core::{Contribution, Event, Member};

#[test]
fn member_serialization_uses_the_form_field_names() {
    let member = Member {
        id: 1,
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "0788123456".to_string(),
        location: "New York".to_string(),
        role: "Admin".to_string(),
        date_of_registration: "2023-01-15".to_string(),
        password: "Sunday@10".to_string(),
    };

    let json = serde_json::to_value(&member).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "John Doe");
    assert_eq!(json["dateOfRegistration"], "2023-01-15");
    assert!(json.get("date_of_registration").is_none());

    let decoded: Member = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, member);
}

#[test]
fn contribution_serialization_uses_member_name_in_camel_case() {
    let contribution = Contribution {
        id: 3,
        member_name: "Jane Smith".to_string(),
        amount: "50".to_string(),
        date: "2023-01-20".to_string(),
    };

    let json = serde_json::to_value(&contribution).unwrap();
    assert_eq!(json["memberName"], "Jane Smith");
    assert_eq!(json["amount"], "50");

    let decoded: Contribution = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contribution);
}

#[test]
fn event_serialization_round_trips_with_and_without_picture() {
    let event = Event {
        id: 2,
        title: "Charity Run".to_string(),
        description: "A charity run to raise funds.".to_string(),
        date: "2023-04-10".to_string(),
        location: "City Park".to_string(),
        picture: Some("data:image/png;base64,cG5n".to_string()),
    };

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["picture"], "data:image/png;base64,cG5n");
    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);

    let bare = Event {
        picture: None,
        ..event
    };
    let json = serde_json::to_value(&bare).unwrap();
    assert!(json["picture"].is_null());
}
