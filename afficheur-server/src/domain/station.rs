//! Station classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Traffic classification of a station, as managed in the station admin.
///
/// The classification drives the platform reveal window: a large city
/// station only announces the platform shortly before departure, while an
/// interurban stop can show it most of the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationCategory {
    /// High-traffic city station.
    #[default]
    Ville,
    /// Low-traffic interurban station.
    Interurbain,
}

impl StationCategory {
    /// Parse a category label as stored by the station admin.
    ///
    /// Matching is case-insensitive because the admin UI historically saved
    /// both "Ville" and "ville". Unknown labels resolve to `None`; callers
    /// default to [`StationCategory::Ville`].
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("ville") {
            Some(StationCategory::Ville)
        } else if s.eq_ignore_ascii_case("interurbain") {
            Some(StationCategory::Interurbain)
        } else {
            None
        }
    }

    /// How many minutes before its display time a train's platform is shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use afficheur_server::domain::StationCategory;
    ///
    /// assert_eq!(StationCategory::Ville.reveal_window_minutes(), 30);
    /// assert_eq!(StationCategory::Interurbain.reveal_window_minutes(), 12 * 60);
    /// ```
    pub fn reveal_window_minutes(&self) -> i32 {
        match self {
            StationCategory::Ville => 30,
            StationCategory::Interurbain => 12 * 60,
        }
    }
}

impl fmt::Display for StationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationCategory::Ville => f.write_str("Ville"),
            StationCategory::Interurbain => f.write_str("Interurbain"),
        }
    }
}
