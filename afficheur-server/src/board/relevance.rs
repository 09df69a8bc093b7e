//! Station relevance: does a schedule concern this station for this board?
//!
//! A schedule departs a station when it stops there anywhere before its
//! terminus and has a resolvable departure time for that stop. It arrives
//! at a station only at its terminus; intermediate stops are never arrival
//! candidates. Platform-scoped boards additionally require an explicit
//! assignment for the station, with no fallback to the record's bare track.

use crate::domain::{BoardTime, Route, ScheduleRecord};

use super::request::Direction;

/// A schedule's relevance to one station and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relevance {
    /// Position of the station on the schedule's route.
    pub position: usize,
    /// Time to display for the schedule at that station.
    pub display_time: BoardTime,
}

/// Assess whether a record belongs on a board.
///
/// Returns `None` for irrelevant or undisplayable records: the station is
/// not on the route, the route is degenerate, the relevant stop has no
/// resolvable time, or a platform scope does not match. A missing time
/// excludes the record; it is never defaulted.
pub fn assess(
    record: &ScheduleRecord,
    route: &Route,
    station: &str,
    direction: Direction,
    platform: Option<&str>,
) -> Option<Relevance> {
    // Single-stop routes are malformed for display purposes.
    if route.is_degenerate() {
        return None;
    }

    let position = route.position_of(station)?;
    let last = route.len() - 1;

    let display_time = match direction {
        Direction::Departures => {
            if position == last {
                // A train does not depart from its terminus.
                return None;
            }
            if position == 0 {
                record.departure_time?
            } else {
                route.stop_at(position)?.departure?
            }
        }
        Direction::Arrivals => {
            // Only the terminus is an arrival candidate.
            if position != last {
                return None;
            }
            record.arrival_time?
        }
    };

    if let Some(platform) = platform {
        if !record.is_assigned_to(station, platform) {
            return None;
        }
    }

    Some(Relevance {
        position,
        display_time,
    })
}
