//! Location filter: which map points are visible for a given type selection.
//!
//! Pure functions over the read-only catalog. An empty selection is a valid
//! "nothing to display" state, not an error.

use crate::domain::{DomainError, Location, LocationType};
use std::collections::HashSet;

/// Returns the locations whose type is in `selected`, preserving catalog order.
pub fn filter(catalog: &[Location], selected: &HashSet<LocationType>) -> Vec<Location> {
    catalog
        .iter()
        .filter(|l| selected.contains(&l.kind))
        .cloned()
        .collect()
}

/// Distinct types present in the catalog, sorted by label. These are the filter options
/// and the default selection.
pub fn available_types(catalog: &[Location]) -> Vec<LocationType> {
    let mut types: Vec<LocationType> = catalog
        .iter()
        .map(|l| l.kind)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    types.sort_by_key(|t| t.label());
    types
}

/// Parse a list of type labels (e.g. from `--types shop,key-point`).
pub fn parse_types<S: AsRef<str>>(labels: &[S]) -> Result<HashSet<LocationType>, DomainError> {
    labels
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Bounding box of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

/// Returns `None` for an empty list.
pub fn bounds(locations: &[Location]) -> Option<Bounds> {
    let first = locations.first()?;
    let init = Bounds {
        min_lat: first.lat,
        max_lat: first.lat,
        min_lon: first.lon,
        max_lon: first.lon,
    };
    Some(locations.iter().skip(1).fold(init, |b, l| Bounds {
        min_lat: b.min_lat.min(l.lat),
        max_lat: b.max_lat.max(l.lat),
        min_lon: b.min_lon.min(l.lon),
        max_lon: b.max_lon.max(l.lon),
    }))
}
