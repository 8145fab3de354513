//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    Community, DirectoryEntry, DirectoryKind, FeedMessage, Location, LocationType, NewsItem,
    Notification, NotificationLevel, TIMESTAMP_FORMAT, UtilityKind, UtilitySchedule,
};
pub use errors::{DomainError, ValidationError};
