//! Application use cases. Orchestrate domain logic via ports.

pub mod feed_service;
pub mod location_filter;
pub mod session;

pub use feed_service::FeedService;
pub use session::Session;
