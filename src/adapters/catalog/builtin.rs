//! Built-in community data for Ward 12, ABC City. Implements CatalogPort.
//!
//! Edit the tables below to change what the board shows, or point `--data` at a JSON file.

use crate::domain::{
    Community, DirectoryEntry, DirectoryKind as D, DomainError, FeedMessage, Location,
    LocationType as L, NewsItem, Notification, NotificationLevel, UtilityKind as U,
    UtilitySchedule,
};
use crate::ports::CatalogPort;

pub const REGION_NAME: &str = "Ward 12, ABC City";

/// Build the default data set. Every record goes through its validating constructor.
pub fn builtin_community() -> Result<Community, DomainError> {
    let locations = vec![
        Location::new("Green Grocers", L::Shop, 37.7749, -122.4194)?,
        Location::new("Asha Clinic", L::Service, 37.7756, -122.4183)?,
        Location::new("Community Hall", L::KeyPoint, 37.7768, -122.4170)?,
        Location::new("Local Leader - Mr. Roy", L::Leader, 37.7750, -122.4160)?,
        Location::new("Bakery Corner", L::Shop, 37.7740, -122.4205)?,
    ];

    let news = vec![
        NewsItem::new(
            "Road repair on Main St",
            "2025-11-01",
            "Main St will have partial closures from Nov 3 to Nov 5 for resurfacing.",
            &["Transport", "Alert"],
        )?,
        NewsItem::new(
            "Health camp this weekend",
            "2025-10-28",
            "Free health checkup at Community Hall on Sunday 10am-2pm.",
            &["Health"],
        )?,
        NewsItem::new(
            "Festive cleanup drive",
            "2025-10-20",
            "Volunteer cleanup drive; meet at 8am near Bakery Corner.",
            &["Community"],
        )?,
    ];

    let directory = vec![
        DirectoryEntry::new("Green Grocers", D::Shop, "+1-555-0101", "Groceries & vegetables")?,
        DirectoryEntry::new("Asha Clinic", D::Service, "+1-555-0202", "General physician")?,
        DirectoryEntry::new("Mr. Roy", D::LocalLeader, "+1-555-0303", "Ward representative")?,
    ];

    let seed_messages = vec![
        FeedMessage::new(
            "Neha",
            "2025-10-31 14:20",
            "Does anyone know the pharmacy timings on Sundays?",
        ),
        FeedMessage::new(
            "Amit",
            "2025-10-31 15:05",
            "Garbage truck missed our lane today.",
        ),
        FeedMessage::new(
            "Saira",
            "2025-10-30 09:00",
            "Looking for a tutor for grade 6 maths.",
        ),
    ];

    let utilities = vec![
        UtilitySchedule::new(U::WaterSupply, "North Block", "Mon, Wed, Fri: 6am - 9am")?,
        UtilitySchedule::new(U::WaterSupply, "South Block", "Tue, Thu: 5pm - 8pm")?,
        UtilitySchedule::new(U::GarbageCollection, "All Areas", "Tue & Fri - 7am")?,
    ];

    let notifications = vec![
        Notification::new(
            NotificationLevel::Info,
            "Novel community meeting on Nov 6 at 6pm, Community Hall.",
        )?,
        Notification::new(
            NotificationLevel::Warning,
            "Expect short water outage on Nov 3 morning due to maintenance.",
        )?,
    ];

    let community = Community {
        region_name: REGION_NAME.to_string(),
        locations,
        news,
        directory,
        seed_messages,
        utilities,
        notifications,
    };
    // Seed messages have no validating constructor; check the whole set once.
    community.validate()?;
    Ok(community)
}

/// Serves the built-in tables.
#[derive(Debug, Default)]
pub struct BuiltinCatalog;

#[async_trait::async_trait]
impl CatalogPort for BuiltinCatalog {
    async fn load(&self) -> Result<Community, DomainError> {
        builtin_community()
    }
}
