//! Stops on a schedule's route.
//!
//! Storage records describe served stations either as bare names or as
//! structured entries with per-stop times. Both shapes resolve to `Stop`
//! once, at the storage boundary; nothing downstream re-sniffs the shape.

use super::BoardTime;

/// A single stop on a route: a station name with optional per-stop times.
///
/// # Time Semantics
///
/// - The route's first stop carries the journey's overall departure time.
/// - The route's last stop carries the journey's overall arrival time.
/// - Intermediate stops carry whatever per-stop times the record supplied;
///   a bare station name has neither, and is therefore not displayable on
///   a departure board at that station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// Station name, as entered by operators.
    pub name: String,
    /// Arrival time at this stop, if known.
    pub arrival: Option<BoardTime>,
    /// Departure time from this stop, if known.
    pub departure: Option<BoardTime>,
}

impl Stop {
    /// A stop with a name and no time data.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arrival: None,
            departure: None,
        }
    }

    /// A stop with explicit times.
    pub fn new(
        name: impl Into<String>,
        arrival: Option<BoardTime>,
        departure: Option<BoardTime>,
    ) -> Self {
        Self {
            name: name.into(),
            arrival,
            departure,
        }
    }
}
