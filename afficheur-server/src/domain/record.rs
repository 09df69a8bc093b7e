//! Schedule records.
//!
//! A `ScheduleRecord` describes one train's full multi-stop journey as
//! entered into storage. Records are owned by the storage collaborator and
//! read-only to the board engine; every board computation derives the
//! ephemeral views (route, rows) fresh from them.

use std::collections::HashMap;

use super::{BoardTime, Circulation, Stop};

/// One train's journey, as stored.
///
/// `departure_station`/`arrival_station` are the journey's first and last
/// stops; `served_stations` lists the intermediate stops in geographic
/// order. The arrival station may or may not be redundantly included at the
/// end of `served_stations` — route building tolerates both.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRecord {
    /// Storage identifier.
    pub id: i64,
    /// Train number for display (e.g. "891045").
    pub train_number: String,
    /// Train type for display (e.g. "TER", "TGV INOUI").
    pub train_type: String,
    /// First stop of the journey.
    pub departure_station: String,
    /// Last stop of the journey.
    pub arrival_station: String,
    /// Departure time from the first stop.
    pub departure_time: Option<BoardTime>,
    /// Arrival time at the last stop.
    pub arrival_time: Option<BoardTime>,
    /// Intermediate stops, in geographic order.
    pub served_stations: Vec<Stop>,
    /// Platform assigned per station name (subset of the route).
    pub track_assignments: HashMap<String, String>,
    /// Fallback platform when a station has no explicit assignment.
    pub track: Option<String>,
    /// Weekdays the schedule runs on; empty means every day.
    pub circulation: Circulation,
    /// Announced delay in minutes; 0 means on time.
    pub delay_minutes: u32,
    /// Whether the whole journey is cancelled.
    pub is_cancelled: bool,
}

impl ScheduleRecord {
    /// Platform assigned to `station`, falling back to the record's `track`.
    ///
    /// This is the unscoped lookup used by full-station boards; platform
    /// scoped boards match `track_assignments` exactly and never fall back.
    pub fn platform_at(&self, station: &str) -> Option<&str> {
        self.track_assignments
            .get(station)
            .map(String::as_str)
            .or(self.track.as_deref())
    }

    /// True if `station` has an explicit assignment equal to `platform`.
    pub fn is_assigned_to(&self, station: &str, platform: &str) -> bool {
        self.track_assignments.get(station).map(String::as_str) == Some(platform)
    }
}
