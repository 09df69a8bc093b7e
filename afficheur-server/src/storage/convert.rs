//! Conversion from raw storage DTOs to domain records.
//!
//! Conversion degrades per field: an unparseable time or an undecodable
//! structured column becomes an absent value, never an error. Only a record
//! that cannot identify its journey endpoints is rejected, and callers log
//! and skip it rather than failing the whole board.

use crate::domain::{BoardTime, Circulation, ScheduleRecord, Stop};

use super::types::{RawSchedule, RawStop};

/// Error for records too malformed to convert.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConvertError {
    /// A required field is missing or empty
    #[error("schedule {id}: missing required field: {field}")]
    MissingField { id: i64, field: &'static str },
}

/// Convert one raw row into a domain record.
pub fn convert_schedule(raw: RawSchedule) -> Result<ScheduleRecord, ConvertError> {
    let id = raw.id;

    let departure_station = non_empty(raw.departure_station).ok_or(ConvertError::MissingField {
        id,
        field: "departureStation",
    })?;
    let arrival_station = non_empty(raw.arrival_station).ok_or(ConvertError::MissingField {
        id,
        field: "arrivalStation",
    })?;

    let served_stations = raw
        .served_stations
        .and_then(|s| s.decode())
        .unwrap_or_default()
        .into_iter()
        .map(convert_stop)
        .collect();

    let track_assignments = raw
        .track_assignments
        .and_then(|a| a.decode())
        .unwrap_or_default();

    let circulation = raw
        .jours_circulation
        .and_then(|j| j.decode())
        .map(Circulation::from_names)
        .unwrap_or_else(Circulation::every_day);

    Ok(ScheduleRecord {
        id,
        train_number: raw.train_number.unwrap_or_default(),
        train_type: raw.train_type.unwrap_or_default(),
        departure_station,
        arrival_station,
        departure_time: parse_time(raw.departure_time.as_deref()),
        arrival_time: parse_time(raw.arrival_time.as_deref()),
        served_stations,
        track_assignments,
        track: non_empty(raw.track),
        circulation,
        delay_minutes: raw.delay_minutes.unwrap_or(0),
        is_cancelled: raw.is_cancelled.map(|f| f.as_bool()).unwrap_or(false),
    })
}

/// Convert a batch of rows, logging and skipping the malformed ones.
pub fn convert_schedules(raws: Vec<RawSchedule>) -> Vec<ScheduleRecord> {
    let mut records = Vec::with_capacity(raws.len());
    for raw in raws {
        match convert_schedule(raw) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("skipping schedule: {e}"),
        }
    }
    records
}

fn convert_stop(raw: RawStop) -> Stop {
    match raw {
        RawStop::Name(name) => Stop::named(name),
        RawStop::Detailed(d) => {
            // The legacy `time` field stands in for the departure time.
            let departure = parse_time(d.departure_time.as_deref())
                .or_else(|| parse_time(d.time.as_deref()));
            Stop::new(d.name, parse_time(d.arrival_time.as_deref()), departure)
        }
    }
}

fn parse_time(s: Option<&str>) -> Option<BoardTime> {
    BoardTime::parse_hhmm(s?).ok()
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}
