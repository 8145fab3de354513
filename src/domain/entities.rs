//! Domain entities. Pure data structures for the core business.
//!
//! No terminal/IO types here. Records are validated at construction; data loaded by
//! adapters goes through [`Community::validate`] before use.

use super::errors::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format of feed timestamps (`YYYY-MM-DD HH:MM`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Kind of point shown on the local map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationType {
    Shop,
    Service,
    #[serde(rename = "Key Point")]
    KeyPoint,
    Leader,
}

impl LocationType {
    pub const ALL: [LocationType; 4] = [
        LocationType::Shop,
        LocationType::Service,
        LocationType::KeyPoint,
        LocationType::Leader,
    ];

    /// Human label, as shown in the filter control.
    pub fn label(self) -> &'static str {
        match self {
            LocationType::Shop => "Shop",
            LocationType::Service => "Service",
            LocationType::KeyPoint => "Key Point",
            LocationType::Leader => "Leader",
        }
    }

    /// Single-character marker used on the text map.
    pub fn marker(self) -> char {
        match self {
            LocationType::Shop => 'S',
            LocationType::Service => '+',
            LocationType::KeyPoint => 'K',
            LocationType::Leader => 'L',
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts labels and variant names regardless of case and separators:
/// `Key Point`, `keypoint`, `key-point`, `KEY_POINT`.
impl FromStr for LocationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match norm.as_str() {
            "shop" => Ok(LocationType::Shop),
            "service" => Ok(LocationType::Service),
            "keypoint" => Ok(LocationType::KeyPoint),
            "leader" => Ok(LocationType::Leader),
            _ => Err(DomainError::InvalidRecord(format!(
                "unknown location type '{}'",
                s.trim()
            ))),
        }
    }
}

/// A named point on the local map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationType,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        kind: LocationType,
        lat: f64,
        lon: f64,
    ) -> Result<Self, DomainError> {
        let loc = Self {
            name: name.into(),
            kind,
            lat,
            lon,
        };
        loc.validate()?;
        Ok(loc)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("location name", &self.name)?;
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(DomainError::InvalidRecord(format!(
                "location '{}': latitude {} out of range",
                self.name, self.lat
            )));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(DomainError::InvalidRecord(format!(
                "location '{}': longitude {} out of range",
                self.name, self.lon
            )));
        }
        Ok(())
    }
}

/// One post in the community feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedMessage {
    pub user: String,
    /// Local time of posting, `YYYY-MM-DD HH:MM`.
    #[serde(alias = "time")]
    pub timestamp: String,
    pub message: String,
}

impl FeedMessage {
    pub fn new(
        user: impl Into<String>,
        timestamp: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }

    /// Seed entries loaded from data files must carry a user, a parseable timestamp and text.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("feed user", &self.user)?;
        require_text("feed message", &self.message)?;
        chrono::NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).map_err(|e| {
            DomainError::InvalidRecord(format!(
                "feed message by '{}': bad timestamp '{}': {}",
                self.user, self.timestamp, e
            ))
        })?;
        Ok(())
    }
}

/// Local news or bulletin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewsItem {
    /// `date` is `YYYY-MM-DD`.
    pub fn new(
        title: impl Into<String>,
        date: &str,
        content: impl Into<String>,
        tags: &[&str],
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            DomainError::InvalidRecord(format!("news '{}': bad date '{}': {}", title, date, e))
        })?;
        let item = Self {
            title,
            date,
            content: content.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("news title", &self.title)?;
        require_text("news content", &self.content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectoryKind {
    Shop,
    Service,
    #[serde(rename = "Local Leader")]
    LocalLeader,
}

impl fmt::Display for DirectoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DirectoryKind::Shop => "Shop",
            DirectoryKind::Service => "Service",
            DirectoryKind::LocalLeader => "Local Leader",
        })
    }
}

/// Directory listing for a shop, service or local leader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DirectoryKind,
    pub contact: String,
    #[serde(default)]
    pub notes: String,
}

impl DirectoryEntry {
    pub fn new(
        name: impl Into<String>,
        kind: DirectoryKind,
        contact: impl Into<String>,
        notes: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let entry = Self {
            name: name.into(),
            kind,
            contact: contact.into(),
            notes: notes.into(),
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("directory name", &self.name)?;
        require_text("directory contact", &self.contact)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilityKind {
    WaterSupply,
    GarbageCollection,
}

impl UtilityKind {
    pub fn title(self) -> &'static str {
        match self {
            UtilityKind::WaterSupply => "Water Supply",
            UtilityKind::GarbageCollection => "Garbage Collection",
        }
    }
}

/// Recurring utility service window for one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilitySchedule {
    pub kind: UtilityKind,
    pub area: String,
    pub schedule: String,
}

impl UtilitySchedule {
    pub fn new(
        kind: UtilityKind,
        area: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let s = Self {
            kind,
            area: area.into(),
            schedule: schedule.into(),
        };
        s.validate()?;
        Ok(s)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("utility area", &self.area)?;
        require_text("utility schedule", &self.schedule)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// Banner alert shown at the top of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, text: impl Into<String>) -> Result<Self, DomainError> {
        let n = Self {
            level,
            text: text.into(),
        };
        require_text("notification text", &n.text)?;
        Ok(n)
    }
}

/// Everything the board shows for one region. Read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub region_name: String,
    pub locations: Vec<Location>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub directory: Vec<DirectoryEntry>,
    #[serde(default)]
    pub seed_messages: Vec<FeedMessage>,
    #[serde(default)]
    pub utilities: Vec<UtilitySchedule>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl Community {
    /// Re-checks every record. Needed after deserialization, which bypasses the constructors.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("region name", &self.region_name)?;
        for l in &self.locations {
            l.validate()?;
        }
        for n in &self.news {
            n.validate()?;
        }
        for d in &self.directory {
            d.validate()?;
        }
        for m in &self.seed_messages {
            m.validate()?;
        }
        for u in &self.utilities {
            u.validate()?;
        }
        for n in &self.notifications {
            require_text("notification text", &n.text)?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidRecord(format!("{} is empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_type_parse() {
        assert_eq!("Key Point".parse::<LocationType>().unwrap(), LocationType::KeyPoint);
        assert_eq!("key-point".parse::<LocationType>().unwrap(), LocationType::KeyPoint);
        assert_eq!("SHOP".parse::<LocationType>().unwrap(), LocationType::Shop);
        assert_eq!(" leader ".parse::<LocationType>().unwrap(), LocationType::Leader);
        assert!("park".parse::<LocationType>().is_err());
    }

    #[test]
    fn test_location_type_serde_label() {
        let json = serde_json::to_string(&LocationType::KeyPoint).unwrap();
        assert_eq!(json, "\"Key Point\"");
        let back: LocationType = serde_json::from_str("\"Key Point\"").unwrap();
        assert_eq!(back, LocationType::KeyPoint);
    }

    #[test]
    fn test_location_rejects_bad_coordinates() {
        assert!(Location::new("Hall", LocationType::KeyPoint, 91.0, 0.0).is_err());
        assert!(Location::new("Hall", LocationType::KeyPoint, 0.0, -180.5).is_err());
        assert!(Location::new("Hall", LocationType::KeyPoint, f64::NAN, 0.0).is_err());
        assert!(Location::new("  ", LocationType::KeyPoint, 0.0, 0.0).is_err());
        assert!(Location::new("Hall", LocationType::KeyPoint, 37.77, -122.41).is_ok());
    }

    #[test]
    fn test_news_rejects_bad_date() {
        let err = NewsItem::new("Fair", "2025-13-01", "Stalls", &[]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRecord(_)));
        let ok = NewsItem::new("Fair", "2025-11-01", "Stalls", &["Community"]).unwrap();
        assert_eq!(ok.date, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
        assert_eq!(ok.tags, vec!["Community".to_string()]);
    }

    #[test]
    fn test_feed_message_accepts_legacy_time_key() {
        let m: FeedMessage =
            serde_json::from_str(r#"{"user":"Neha","time":"2025-10-31 14:20","message":"hi"}"#)
                .unwrap();
        assert_eq!(m.timestamp, "2025-10-31 14:20");
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_feed_message_validate_timestamp() {
        let m = FeedMessage::new("Neha", "yesterday", "hi");
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_directory_kind_display() {
        assert_eq!(DirectoryKind::LocalLeader.to_string(), "Local Leader");
        let json = serde_json::to_string(&DirectoryKind::LocalLeader).unwrap();
        assert_eq!(json, "\"Local Leader\"");
    }

    #[test]
    fn test_utility_kind_title() {
        assert_eq!(UtilityKind::WaterSupply.title(), "Water Supply");
        let json = serde_json::to_string(&UtilityKind::GarbageCollection).unwrap();
        assert_eq!(json, "\"garbage_collection\"");
    }
}
