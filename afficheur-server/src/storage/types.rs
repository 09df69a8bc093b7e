//! Raw schedule DTOs as produced by the storage collaborator.
//!
//! The storage API serializes rows with camelCase keys, and its structured
//! columns have drifted over time: `servedStations`, `trackAssignments` and
//! `joursCirculation` may arrive as native JSON structures or as JSON text
//! stored in a string column, boolean flags may be MySQL 0/1 integers, and a
//! served-station entry is either a bare name or an object with per-stop
//! times. These types accept every historical shape; normalization to the
//! domain model happens once, in [`super::convert`].

use std::collections::HashMap;

use serde::Deserialize;

/// A value that may arrive natively or as a JSON-encoded string.
///
/// # Examples
///
/// ```
/// use afficheur_server::storage::MaybeEncoded;
///
/// let native: MaybeEncoded<Vec<String>> =
///     serde_json::from_str(r#"["Monday"]"#).unwrap();
/// assert_eq!(native.decode(), Some(vec!["Monday".to_string()]));
///
/// let encoded: MaybeEncoded<Vec<String>> =
///     serde_json::from_str(r#""[\"Monday\"]""#).unwrap();
/// assert_eq!(encoded.decode(), Some(vec!["Monday".to_string()]));
///
/// let garbage: MaybeEncoded<Vec<String>> =
///     serde_json::from_str(r#""not json""#).unwrap();
/// assert_eq!(garbage.decode(), None);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MaybeEncoded<T> {
    /// Already-structured value.
    Native(T),
    /// JSON text from a string column; decoded lazily and fallibly.
    Encoded(String),
}

impl<T: serde::de::DeserializeOwned> MaybeEncoded<T> {
    /// Resolve to the structured value, if possible.
    ///
    /// An undecodable string yields `None`; callers treat the field as
    /// empty rather than failing the record.
    pub fn decode(self) -> Option<T> {
        match self {
            MaybeEncoded::Native(value) => Some(value),
            MaybeEncoded::Encoded(text) => serde_json::from_str(&text).ok(),
        }
    }
}

/// A served-station entry: a bare name or a structured stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawStop {
    /// Structured entry with optional per-stop times.
    Detailed(RawStopDetail),
    /// Bare station name, no time data.
    Name(String),
}

impl RawStop {
    /// The station name regardless of shape.
    pub fn name(&self) -> &str {
        match self {
            RawStop::Detailed(d) => &d.name,
            RawStop::Name(n) => n,
        }
    }
}

/// Structured served-station entry.
///
/// `time` is the legacy single-field form and stands for the departure
/// time when `departureTime` is absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStopDetail {
    pub name: String,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

/// A boolean that may arrive as a JSON bool or a 0/1 integer column.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Int(i64),
}

impl Flag {
    pub fn as_bool(self) -> bool {
        match self {
            Flag::Bool(b) => b,
            Flag::Int(i) => i != 0,
        }
    }
}

/// One schedule row as served by the storage API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSchedule {
    pub id: i64,
    #[serde(default)]
    pub train_number: Option<String>,
    #[serde(default)]
    pub train_type: Option<String>,
    #[serde(default)]
    pub departure_station: Option<String>,
    #[serde(default)]
    pub arrival_station: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub served_stations: Option<MaybeEncoded<Vec<RawStop>>>,
    #[serde(default)]
    pub track_assignments: Option<MaybeEncoded<HashMap<String, String>>>,
    #[serde(default)]
    pub track: Option<String>,
    #[serde(default)]
    pub jours_circulation: Option<MaybeEncoded<Vec<String>>>,
    #[serde(default)]
    pub delay_minutes: Option<u32>,
    #[serde(default)]
    pub is_cancelled: Option<Flag>,
}
