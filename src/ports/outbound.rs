//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Community, DomainError};
use chrono::NaiveDateTime;

/// Source of the community data set (built-in tables or a data file).
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    /// Load and validate the full data set. Called once at startup.
    async fn load(&self) -> Result<Community, DomainError>;
}

/// Wall clock used to stamp feed posts.
pub trait ClockPort: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}
