//! Session feed store: seeded once, grows by prepending, read through a bounded view.
//!
//! - Exclusively owned by one session (`&mut self`, no locking)
//! - Newest entry is always at index 0
//! - Rejected posts leave the store untouched

use crate::domain::{FeedMessage, TIMESTAMP_FORMAT, ValidationError};
use crate::ports::ClockPort;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Feed store for one session.
pub struct FeedService {
    clock: Arc<dyn ClockPort>,
    seed: Vec<FeedMessage>,
    messages: Vec<FeedMessage>,
    initialized: bool,
}

impl FeedService {
    /// Create an uninitialized store. Nothing is visible until [`FeedService::initialize`]
    /// (or the first post) copies the seed list in.
    pub fn new(clock: Arc<dyn ClockPort>, seed: Vec<FeedMessage>) -> Self {
        Self {
            clock,
            seed,
            messages: Vec::new(),
            initialized: false,
        }
    }

    /// Copy the seed list into the store on the first call. Later calls keep whatever the
    /// session has posted and just return the current contents.
    pub fn initialize(&mut self) -> Vec<FeedMessage> {
        if !self.initialized {
            self.messages = self.seed.clone();
            self.initialized = true;
            debug!(seeded = self.messages.len(), "feed initialized");
        }
        self.messages.clone()
    }

    /// Prepend a message stamped with the current time. `user` and `message` are stored as given.
    ///
    /// # Errors
    /// `ValidationError::EmptyMessage` when `message` is empty or whitespace-only.
    pub fn post(&mut self, user: &str, message: &str) -> Result<(), ValidationError> {
        if message.trim().is_empty() {
            warn!("rejected empty feed post");
            return Err(ValidationError::EmptyMessage);
        }
        if !self.initialized {
            self.initialize();
        }

        let timestamp = self.clock.now().format(TIMESTAMP_FORMAT).to_string();
        info!(user, %timestamp, len = message.len(), "feed post accepted");
        self.messages
            .insert(0, FeedMessage::new(user, timestamp, message));
        Ok(())
    }

    /// First `limit` entries, most recent first.
    pub fn view(&self, limit: usize) -> Vec<FeedMessage> {
        self.messages.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::builtin_community;
    use crate::adapters::clock::{FixedClock, SystemClock};
    use chrono::{Local, NaiveDate, NaiveDateTime};

    fn fixed_clock() -> Arc<FixedClock> {
        let at = NaiveDate::from_ymd_opt(2025, 11, 2)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        Arc::new(FixedClock::new(at))
    }

    fn seeded() -> FeedService {
        let seed = builtin_community().unwrap().seed_messages;
        let mut feed = FeedService::new(fixed_clock(), seed);
        feed.initialize();
        feed
    }

    #[test]
    fn test_view_after_initialize_is_seed_prefix() {
        let seed = builtin_community().unwrap().seed_messages;
        let feed = seeded();
        for n in 0..6 {
            let view = feed.view(n);
            assert_eq!(view.len(), n.min(seed.len()));
            assert_eq!(view.as_slice(), &seed[..view.len()]);
        }
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut feed = seeded();
        feed.post("Amit", "hello").unwrap();
        let again = feed.initialize();
        assert_eq!(again.len(), 4);
        assert_eq!(again[0].message, "hello");
    }

    #[test]
    fn test_uninitialized_view_is_empty() {
        let feed = FeedService::new(fixed_clock(), builtin_community().unwrap().seed_messages);
        assert!(feed.view(20).is_empty());
        assert!(feed.is_empty());
    }

    #[test]
    fn test_post_whitespace_rejected() {
        let mut feed = seeded();
        let before = feed.view(usize::MAX);
        assert_eq!(feed.post("Amit", "  "), Err(ValidationError::EmptyMessage));
        assert_eq!(feed.post("Amit", ""), Err(ValidationError::EmptyMessage));
        assert_eq!(feed.post("Amit", "\n\t"), Err(ValidationError::EmptyMessage));
        assert_eq!(feed.view(usize::MAX), before);
    }

    #[test]
    fn test_post_then_view_one() {
        let mut feed = seeded();
        feed.post("Amit", "hello").unwrap();
        assert_eq!(
            feed.view(1),
            vec![FeedMessage::new("Amit", "2025-11-02 08:30", "hello")]
        );
    }

    #[test]
    fn test_post_uses_current_time() {
        let mut feed = FeedService::new(Arc::new(SystemClock), Vec::new());
        feed.post("Amit", "hello").unwrap();
        let posted = &feed.view(1)[0];
        let at = NaiveDateTime::parse_from_str(&posted.timestamp, TIMESTAMP_FORMAT).unwrap();
        let drift = (Local::now().naive_local() - at).num_seconds().abs();
        assert!(drift <= 120, "timestamp {} too far from now", posted.timestamp);
    }

    #[test]
    fn test_view_is_stable() {
        let mut feed = seeded();
        feed.post("Neha", "pharmacy opens at 9").unwrap();
        assert_eq!(feed.view(3), feed.view(3));
    }

    #[test]
    fn test_newest_first() {
        let mut feed = seeded();
        feed.post("Amit", "A").unwrap();
        feed.post("Saira", "B").unwrap();
        let msgs: Vec<String> = feed.view(2).into_iter().map(|m| m.message).collect();
        assert_eq!(msgs, vec!["B", "A"]);
        assert_eq!(feed.len(), 5);
    }

    #[test]
    fn test_user_stored_as_given() {
        let mut feed = seeded();
        feed.post(" Amit ", "hello").unwrap();
        feed.post("", "hi").unwrap();
        let users: Vec<String> = feed.view(2).into_iter().map(|m| m.user).collect();
        assert_eq!(users, vec!["", " Amit "]);
    }

    #[test]
    fn test_post_before_initialize_keeps_seed() {
        let seed = builtin_community().unwrap().seed_messages;
        let mut feed = FeedService::new(fixed_clock(), seed.clone());
        feed.post("Amit", "first").unwrap();
        assert_eq!(feed.len(), seed.len() + 1);
        assert_eq!(&feed.view(usize::MAX)[1..], seed.as_slice());
    }

    #[test]
    fn test_multiline_message_kept_intact() {
        let mut feed = seeded();
        feed.post("Saira", "Tutor found!\nThanks everyone.\n").unwrap();
        assert_eq!(feed.view(1)[0].message, "Tutor found!\nThanks everyone.\n");
    }

    #[test]
    fn test_message_text_kept_as_entered() {
        let mut feed = seeded();
        feed.post("Amit", "  spaced out  ").unwrap();
        assert_eq!(feed.view(1)[0].message, "  spaced out  ");
    }
}
