//! Board requests.

use serde::{Deserialize, Serialize};

use crate::domain::{BoardTime, StationCategory, Weekday};

/// Which side of the timetable a board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Departures,
    Arrivals,
}

/// Error returned for a request the engine cannot interpret.
///
/// Data-quality problems in individual records never surface here; they
/// degrade per record. Only a request that fails to name its board is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board request: {0}")]
    InvalidRequest(&'static str),
}

/// One board computation request.
///
/// `now` and `day` come from the host environment at the polling boundary;
/// the engine itself never reads a clock, which keeps every computation a
/// deterministic function of its inputs.
#[derive(Debug, Clone)]
pub struct BoardRequest {
    /// Station the board is mounted at.
    pub station: String,
    /// Departures or arrivals.
    pub direction: Direction,
    /// Restrict to trains explicitly assigned to this platform.
    pub platform: Option<String>,
    /// Current wall-clock time, minute resolution.
    pub now: BoardTime,
    /// Current weekday, for circulation filtering.
    pub day: Weekday,
    /// Category of the station, driving the platform reveal window.
    pub category: StationCategory,
    /// Maximum number of rows to return.
    pub page_size: usize,
}

impl BoardRequest {
    /// Check the request names a board at all.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.station.trim().is_empty() {
            return Err(BoardError::InvalidRequest("station name is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(station: &str) -> BoardRequest {
        BoardRequest {
            station: station.into(),
            direction: Direction::Departures,
            platform: None,
            now: BoardTime::parse_hhmm("08:00").unwrap(),
            day: Weekday::Monday,
            category: StationCategory::Ville,
            page_size: 10,
        }
    }

    #[test]
    fn named_station_is_valid() {
        assert!(request("Dijon").validate().is_ok());
    }

    #[test]
    fn missing_station_is_invalid() {
        assert!(request("").validate().is_err());
        assert!(request("   ").validate().is_err());
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Direction::Departures).unwrap(),
            "\"departures\""
        );
        assert_eq!(
            serde_json::to_string(&Direction::Arrivals).unwrap(),
            "\"arrivals\""
        );
    }
}
