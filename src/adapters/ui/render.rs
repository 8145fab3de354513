//! Plain-text rendering of board sections. No terminal I/O; the TUI and `show` print these.

use crate::domain::{
    Community, DirectoryEntry, DomainError, FeedMessage, Location, LocationType, NewsItem,
    Notification, NotificationLevel, UtilityKind, UtilitySchedule,
};
use crate::usecases::location_filter;
use std::fmt::Write as _;

/// Text map size in characters (inside the border).
pub const MAP_WIDTH: usize = 48;
pub const MAP_HEIGHT: usize = 12;

/// Marker for a cell holding points of different types.
const CROWDED: char = '*';

pub const EMPTY_MAP: &str = "No locations to show. Adjust the filters.";

fn rule() -> String {
    "-".repeat(40)
}

pub fn header(region_name: &str) -> String {
    format!("Naborly — {}", region_name)
}

pub fn notification_tag(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "[INFO]",
        NotificationLevel::Warning => "[WARNING]",
        NotificationLevel::Error => "[ERROR]",
    }
}

pub fn notifications(items: &[Notification]) -> String {
    let mut out = String::new();
    for n in items {
        let _ = writeln!(out, "{} {}", notification_tag(n.level), n.text);
    }
    out
}

/// Plot points on a `width` x `height` grid scaled to their bounding box (north up),
/// followed by a legend and a `name | type | lat | lon` table.
pub fn map(locations: &[Location], width: usize, height: usize) -> String {
    let Some(b) = location_filter::bounds(locations) else {
        return format!("{}\n", EMPTY_MAP);
    };
    let width = width.max(1);
    let height = height.max(1);

    let mut grid = vec![vec![' '; width]; height];
    for l in locations {
        let col = scale(l.lon - b.min_lon, b.lon_span(), width);
        let row = height - 1 - scale(l.lat - b.min_lat, b.lat_span(), height);
        let cell = &mut grid[row][col];
        *cell = match *cell {
            ' ' => l.kind.marker(),
            c if c == l.kind.marker() => c,
            _ => CROWDED,
        };
    }

    let mut out = String::new();
    let border = format!("+{}+", "-".repeat(width));
    let _ = writeln!(out, "{}", border);
    for row in &grid {
        let _ = writeln!(out, "|{}|", row.iter().collect::<String>());
    }
    let _ = writeln!(out, "{}", border);

    let shown = location_filter::available_types(locations);
    let legend: Vec<String> = shown
        .iter()
        .map(|t| format!("{} {}", t.marker(), t.label()))
        .collect();
    let _ = writeln!(out, "{}", legend.join("   "));
    let _ = writeln!(out);
    let _ = writeln!(out, "Points shown on the map:");
    out.push_str(&location_table(locations));
    out
}

/// Position of `offset` within `span`, mapped onto `0..cells`. A zero span centres.
fn scale(offset: f64, span: f64, cells: usize) -> usize {
    if span <= 0.0 {
        return cells / 2;
    }
    let pos = (offset / span * (cells - 1) as f64).round();
    (pos.max(0.0) as usize).min(cells - 1)
}

fn location_table(locations: &[Location]) -> String {
    let name_w = locations
        .iter()
        .map(|l| l.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("name".len());
    let type_w = LocationType::ALL
        .iter()
        .map(|t| t.label().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_w$} | {:<type_w$} | {:>9} | {:>10}",
        "name", "type", "lat", "lon"
    );
    let _ = writeln!(out, "{}", "-".repeat(name_w + type_w + 29));
    for l in locations {
        let _ = writeln!(
            out,
            "{:<name_w$} | {:<type_w$} | {:>9.4} | {:>10.4}",
            l.name,
            l.kind.label(),
            l.lat,
            l.lon
        );
    }
    out
}

pub fn directory(entries: &[DirectoryEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = writeln!(out, "{} ({}) — {}", e.name, e.kind, e.contact);
        if !e.notes.is_empty() {
            let _ = writeln!(out, "    {}", e.notes);
        }
    }
    out
}

pub fn news(items: &[NewsItem]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{} — {}", item.title, item.date.format("%Y-%m-%d"));
        let _ = writeln!(out, "{}", item.content);
        if !item.tags.is_empty() {
            let _ = writeln!(out, "Tags: {}", item.tags.join(", "));
        }
        let _ = writeln!(out, "{}", rule());
    }
    out
}

pub fn feed(messages: &[FeedMessage]) -> String {
    if messages.is_empty() {
        return "No messages yet.\n".to_string();
    }
    let mut out = String::new();
    for m in messages {
        let _ = writeln!(out, "{} — {}", m.user, m.timestamp);
        let _ = writeln!(out, "{}", m.message);
        let _ = writeln!(out, "{}", rule());
    }
    out
}

/// Schedules grouped by kind, kinds in order of first appearance.
pub fn utilities(schedules: &[UtilitySchedule]) -> String {
    let mut kinds: Vec<UtilityKind> = Vec::new();
    for s in schedules {
        if !kinds.contains(&s.kind) {
            kinds.push(s.kind);
        }
    }

    let mut out = String::new();
    for kind in kinds {
        let _ = writeln!(out, "{}", kind.title());
        for s in schedules.iter().filter(|s| s.kind == kind) {
            let _ = writeln!(out, "- {}: {}", s.area, s.schedule);
        }
    }
    out
}

/// The whole data set as pretty JSON (also the data-file format).
pub fn raw(community: &Community) -> Result<String, DomainError> {
    serde_json::to_string_pretty(community).map_err(|e| DomainError::Catalog(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::builtin_community;
    use crate::domain::LocationType as L;

    #[test]
    fn test_map_corners() {
        let locs = vec![
            Location::new("South West", L::Shop, 0.0, 0.0).unwrap(),
            Location::new("North East", L::Leader, 1.0, 1.0).unwrap(),
        ];
        let out = map(&locs, 5, 3);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "+-----+");
        assert_eq!(lines[1], "|    L|");
        assert_eq!(lines[2], "|     |");
        assert_eq!(lines[3], "|S    |");
        assert_eq!(lines[4], "+-----+");
        assert_eq!(lines[5], "L Leader   S Shop");
        assert!(out.contains("South West"));
    }

    #[test]
    fn test_map_single_point_centred() {
        let locs = vec![Location::new("Hall", L::KeyPoint, 10.0, 10.0).unwrap()];
        let out = map(&locs, 5, 3);
        assert_eq!(out.lines().nth(2), Some("|  K  |"));
    }

    #[test]
    fn test_map_crowded_cell() {
        let locs = vec![
            Location::new("A", L::Shop, 0.0, 0.0).unwrap(),
            Location::new("B", L::Service, 0.0, 0.0).unwrap(),
        ];
        assert!(map(&locs, 5, 3).contains('*'));
    }

    #[test]
    fn test_map_empty() {
        assert_eq!(map(&[], MAP_WIDTH, MAP_HEIGHT).trim(), EMPTY_MAP);
    }

    #[test]
    fn test_builtin_sections() {
        let c = builtin_community().unwrap();

        let dir = directory(&c.directory);
        assert!(dir.contains("Mr. Roy (Local Leader) — +1-555-0303"));
        assert!(dir.contains("Ward representative"));

        let n = news(&c.news);
        assert!(n.starts_with("Road repair on Main St — 2025-11-01\n"));
        assert!(n.contains("Tags: Transport, Alert"));

        let f = feed(&c.seed_messages);
        assert!(f.starts_with("Neha — 2025-10-31 14:20\n"));

        let u = utilities(&c.utilities);
        assert_eq!(
            u,
            "Water Supply\n\
             - North Block: Mon, Wed, Fri: 6am - 9am\n\
             - South Block: Tue, Thu: 5pm - 8pm\n\
             Garbage Collection\n\
             - All Areas: Tue & Fri - 7am\n"
        );

        let alerts = notifications(&c.notifications);
        assert!(alerts.starts_with("[INFO] Novel community meeting"));
        assert!(alerts.contains("[WARNING] Expect short water outage"));
    }

    #[test]
    fn test_raw_is_loadable_json() {
        let c = builtin_community().unwrap();
        let json = raw(&c).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["region_name"], "Ward 12, ABC City");
        assert_eq!(v["locations"][2]["type"], "Key Point");
    }

    #[test]
    fn test_empty_feed() {
        assert_eq!(feed(&[]), "No messages yet.\n");
    }
}
