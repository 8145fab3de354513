//! Per-session context. Owns the feed store and the map filter selection and is passed
//! explicitly to every UI handler.

use crate::domain::{Community, Location, LocationType};
use crate::ports::ClockPort;
use crate::usecases::feed_service::FeedService;
use crate::usecases::location_filter;
use std::collections::HashSet;
use std::sync::Arc;

pub struct Session {
    pub feed: FeedService,
    selected: HashSet<LocationType>,
}

impl Session {
    /// Start a session: feed seeded, every type present in the catalog selected.
    pub fn start(community: &Community, clock: Arc<dyn ClockPort>) -> Self {
        let mut feed = FeedService::new(clock, community.seed_messages.clone());
        feed.initialize();
        Self {
            feed,
            selected: location_filter::available_types(&community.locations)
                .into_iter()
                .collect(),
        }
    }

    /// Current selection, sorted by label.
    pub fn selected_types(&self) -> Vec<LocationType> {
        let mut v: Vec<LocationType> = self.selected.iter().copied().collect();
        v.sort_by_key(|t| t.label());
        v
    }

    pub fn set_selected_types(&mut self, types: impl IntoIterator<Item = LocationType>) {
        self.selected = types.into_iter().collect();
    }

    pub fn visible_locations(&self, catalog: &[Location]) -> Vec<Location> {
        location_filter::filter(catalog, &self.selected)
    }
}
