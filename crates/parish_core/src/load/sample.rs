//! Startup sample datasets standing in for a remote backend.

use rand::Rng;

use crate::model::contribution::Contribution;
use crate::model::event::Event;
use crate::model::member::Member;
use crate::model::RecordId;

/// Contributions generated for the contributions page on startup.
pub const SAMPLE_CONTRIBUTION_COUNT: usize = 50;

/// Seed members shown before any user input.
pub fn sample_members() -> Vec<Member> {
    let seed = [
        ("John Doe", "john@example.com", "1234567890", "New York", "Admin", "2023-01-15"),
        ("Jane Smith", "jane@example.com", "9876543210", "Los Angeles", "Member", "2023-02-10"),
        ("Alice Johnson", "alice@example.com", "5551234567", "Chicago", "Moderator", "2023-03-05"),
        ("Bob Brown", "bob@example.com", "4449876543", "Houston", "Member", "2023-04-20"),
    ];
    seed.iter()
        .enumerate()
        .map(|(index, (name, email, phone, location, role, date))| Member {
            id: index as RecordId + 1,
            name: (*name).to_string(),
            email: (*email).to_string(),
            phone: (*phone).to_string(),
            location: (*location).to_string(),
            role: (*role).to_string(),
            date_of_registration: (*date).to_string(),
            password: "ChangeMe@123".to_string(),
        })
        .collect()
}

/// Seed events shown before any user input.
pub fn sample_events() -> Vec<Event> {
    let seed = [
        ("Community Meeting", "A meeting to discuss community issues.", "2023-04-01", "Town Hall"),
        ("Charity Run", "A charity run to raise funds.", "2023-04-10", "City Park"),
        ("Music Festival", "A festival featuring local bands.", "2023-04-15", "Main Square"),
        ("Art Exhibition", "An exhibition showcasing local artists.", "2023-04-20", "Art Gallery"),
        ("Blood Donation Camp", "A camp for blood donation.", "2023-04-25", "Community Center"),
        ("Book Fair", "A fair for book lovers.", "2023-05-01", "Library"),
        ("Food Festival", "A festival celebrating local cuisine.", "2023-05-05", "Market Street"),
        ("Tech Conference", "A conference for tech enthusiasts.", "2023-05-10", "Convention Center"),
        ("Yoga Workshop", "A workshop on yoga and wellness.", "2023-05-15", "Wellness Center"),
        ("Volunteer Meetup", "A meetup for volunteers.", "2023-05-20", "Community Hall"),
    ];
    seed.iter()
        .enumerate()
        .map(|(index, (title, description, date, location))| Event {
            id: index as RecordId + 1,
            title: (*title).to_string(),
            description: (*description).to_string(),
            date: (*date).to_string(),
            location: (*location).to_string(),
            picture: None,
        })
        .collect()
}

/// Randomized contributions: amounts uniform in [50, 150) with two decimals,
/// dates spread over 2023.
pub fn sample_contributions(count: usize) -> Vec<Contribution> {
    let mut rng = rand::thread_rng();
    (1..=count)
        .map(|index| {
            let amount: f64 = rng.gen_range(50.0..150.0);
            let month: u32 = rng.gen_range(1..=12);
            let day: u32 = rng.gen_range(1..=28);
            Contribution {
                id: index as RecordId,
                member_name: format!("Member {index}"),
                amount: format!("{amount:.2}"),
                date: format!("2023-{month:02}-{day:02}"),
            }
        })
        .collect()
}
