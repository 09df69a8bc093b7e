//! Board assembly: the full pipeline from schedule records to display rows.
//!
//! Each call is a pure function of the records and the request; nothing is
//! cached between calls and `now` is an input, so the same inputs always
//! produce the same board. Records that cannot be displayed are dropped
//! individually and logged, never failing the whole board.

use crate::domain::{Route, ScheduleRecord, TrainStatus};

use super::relevance;
use super::request::{BoardError, BoardRequest, Direction};
use super::resolve;
use super::window;

/// How many of the leading rows carry their upstream stop list.
///
/// The display pages only render the already-served stops for the trains at
/// the top of the board, so the engine does not compute them elsewhere.
const UPSTREAM_ROWS: usize = 2;

/// One row of a rendered board.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DisplayRow {
    pub train_number: String,
    pub train_type: String,
    /// The time shown in the board's time column.
    pub display_time: crate::domain::BoardTime,
    /// Terminus for a departure board, origin for an arrival board.
    pub destination_or_origin: String,
    /// Platform, when inside the station's reveal window.
    pub platform: Option<String>,
    pub status: TrainStatus,
    pub delay_minutes: u32,
    /// Stops still ahead of the board's station, through the terminus.
    pub downstream_stations: Vec<String>,
    /// Stops already served; populated for the first rows only.
    pub upstream_stations: Vec<String>,
}

/// A computed board.
///
/// `NoService` is the explicit empty state: the request was valid and the
/// computation ran, but no train qualifies right now. It is distinct from
/// any fetch or request failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Board {
    NoService,
    Rows(Vec<DisplayRow>),
}

impl Board {
    /// Rows of the board, empty for `NoService`.
    pub fn rows(&self) -> &[DisplayRow] {
        match self {
            Board::NoService => &[],
            Board::Rows(rows) => rows,
        }
    }
}

/// Compute a board from schedule records.
///
/// Applies, in order: circulation filtering for the request's day, route
/// building, station relevance (with platform scoping when requested), the
/// past-due cutoff, chronological ordering, and page truncation; then
/// resolves status and platform per surviving row.
pub fn assemble(records: &[ScheduleRecord], request: &BoardRequest) -> Result<Board, BoardError> {
    request.validate()?;

    let mut candidates = Vec::new();
    for record in records {
        if !record.circulation.runs_on(request.day) {
            tracing::trace!(id = record.id, day = %request.day, "not circulating today");
            continue;
        }

        let route = Route::build(record);
        if route.is_degenerate() {
            tracing::debug!(id = record.id, "degenerate route, skipping");
            continue;
        }

        let Some(found) = relevance::assess(
            record,
            &route,
            &request.station,
            request.direction,
            request.platform.as_deref(),
        ) else {
            continue;
        };

        candidates.push((found.display_time, (record, route, found.position)));
    }

    let upcoming = window::upcoming(candidates, request.now, request.page_size);

    let rows: Vec<DisplayRow> = upcoming
        .into_iter()
        .enumerate()
        .map(|(row_idx, (display_time, (record, route, position)))| {
            let destination_or_origin = match request.direction {
                Direction::Departures => record.arrival_station.clone(),
                Direction::Arrivals => record.departure_station.clone(),
            };
            let upstream_stations = if row_idx < UPSTREAM_ROWS {
                route.upstream_names(position)
            } else {
                Vec::new()
            };
            DisplayRow {
                train_number: record.train_number.clone(),
                train_type: record.train_type.clone(),
                display_time,
                destination_or_origin,
                platform: resolve::platform(
                    record,
                    &request.station,
                    display_time,
                    request.now,
                    request.category,
                ),
                status: TrainStatus::of(record),
                delay_minutes: record.delay_minutes,
                downstream_stations: route.downstream_names(position),
                upstream_stations,
            }
        })
        .collect();

    if rows.is_empty() {
        Ok(Board::NoService)
    } else {
        Ok(Board::Rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{BoardTime, Circulation, StationCategory, Stop, Weekday};

    fn time(s: &str) -> BoardTime {
        BoardTime::parse_hhmm(s).unwrap()
    }

    fn record(id: i64, departure: &str, departure_time: &str, arrival: &str) -> ScheduleRecord {
        ScheduleRecord {
            id,
            train_number: format!("89{id:04}"),
            train_type: "TER".into(),
            departure_station: departure.into(),
            arrival_station: arrival.into(),
            departure_time: Some(time(departure_time)),
            arrival_time: Some(time("23:00")),
            served_stations: Vec::new(),
            track_assignments: HashMap::new(),
            track: None,
            circulation: Circulation::every_day(),
            delay_minutes: 0,
            is_cancelled: false,
        }
    }

    fn departures(station: &str, now: &str) -> BoardRequest {
        BoardRequest {
            station: station.into(),
            direction: Direction::Departures,
            platform: None,
            now: time(now),
            day: Weekday::Monday,
            category: StationCategory::Ville,
            page_size: 10,
        }
    }

    #[test]
    fn empty_station_name_is_rejected() {
        let err = assemble(&[], &departures("  ", "08:00")).unwrap_err();
        assert!(matches!(err, BoardError::InvalidRequest(_)));
    }

    #[test]
    fn no_eligible_train_is_no_service() {
        let records = vec![record(1, "Dijon", "07:00", "Lyon")];
        let board = assemble(&records, &departures("Dijon", "08:00")).unwrap();
        assert_eq!(board, Board::NoService);
    }

    #[test]
    fn rows_are_chronological_and_future_only() {
        let records = vec![
            record(1, "Dijon", "09:30", "Lyon"),
            record(2, "Dijon", "07:45", "Lyon"),
            record(3, "Dijon", "08:15", "Lyon"),
        ];
        let board = assemble(&records, &departures("Dijon", "08:00")).unwrap();

        let times: Vec<String> = board
            .rows()
            .iter()
            .map(|r| r.display_time.to_string())
            .collect();
        assert_eq!(times, vec!["08:15", "09:30"]);
    }

    #[test]
    fn circulation_filters_by_day() {
        let mut monday_only = record(1, "Dijon", "09:00", "Lyon");
        monday_only.circulation = Circulation::from_names(["Monday"]);

        let mut req = departures("Dijon", "08:00");
        let board = assemble(std::slice::from_ref(&monday_only), &req).unwrap();
        assert_eq!(board.rows().len(), 1);

        req.day = Weekday::Tuesday;
        let board = assemble(std::slice::from_ref(&monday_only), &req).unwrap();
        assert_eq!(board, Board::NoService);
    }

    #[test]
    fn cancelled_wins_over_delay() {
        let mut r = record(1, "Dijon", "09:00", "Lyon");
        r.is_cancelled = true;
        r.delay_minutes = 15;

        let board = assemble(&[r], &departures("Dijon", "08:00")).unwrap();
        let row = &board.rows()[0];
        assert_eq!(row.status, TrainStatus::Cancelled);
        assert_eq!(row.delay_minutes, 15);
    }

    #[test]
    fn platform_reveal_window_applies() {
        let mut soon = record(1, "Dijon", "08:25", "Lyon");
        soon.track_assignments
            .insert("Dijon".to_string(), "3".to_string());
        let mut later = record(2, "Dijon", "08:45", "Lyon");
        later
            .track_assignments
            .insert("Dijon".to_string(), "3".to_string());

        let board = assemble(&[soon, later], &departures("Dijon", "08:00")).unwrap();

        assert_eq!(board.rows()[0].platform.as_deref(), Some("3"));
        assert_eq!(board.rows()[1].platform, None);
    }

    #[test]
    fn arrival_board_lists_terminating_trains_only() {
        let mut r = record(1, "Dijon", "08:10", "Lyon");
        r.served_stations = vec![Stop::new("Beaune", Some(time("08:40")), Some(time("08:42")))];
        r.arrival_time = Some(time("10:02"));
        let records = vec![r];

        let mut at_terminus = departures("Lyon", "08:00");
        at_terminus.direction = Direction::Arrivals;
        let board = assemble(&records, &at_terminus).unwrap();
        assert_eq!(board.rows().len(), 1);
        assert_eq!(board.rows()[0].display_time, time("10:02"));
        assert_eq!(board.rows()[0].destination_or_origin, "Dijon");

        // An intermediate stop never shows the train as arriving.
        let mut at_intermediate = at_terminus.clone();
        at_intermediate.station = "Beaune".into();
        let board = assemble(&records, &at_intermediate).unwrap();
        assert_eq!(board, Board::NoService);
    }

    #[test]
    fn platform_scope_excludes_track_fallback() {
        let mut r = record(1, "Dijon", "09:00", "Lyon");
        r.track = Some("5".into());

        let mut req = departures("Dijon", "08:00");
        req.platform = Some("5".into());

        let board = assemble(&[r], &req).unwrap();
        assert_eq!(board, Board::NoService);
    }

    #[test]
    fn platform_scope_matches_exact_assignment() {
        let mut r = record(1, "Dijon", "09:00", "Lyon");
        r.track_assignments
            .insert("Dijon".to_string(), "5".to_string());

        let mut req = departures("Dijon", "08:00");
        req.platform = Some("5".into());

        let board = assemble(&[r], &req).unwrap();
        assert_eq!(board.rows().len(), 1);
    }

    #[test]
    fn page_size_keeps_only_the_earliest() {
        let records: Vec<ScheduleRecord> = (0..12)
            .map(|i| {
                record(
                    i,
                    "Dijon",
                    &format!("{:02}:{:02}", 9 + i / 60, i % 60),
                    "Lyon",
                )
            })
            .collect();

        let mut req = departures("Dijon", "08:00");
        req.page_size = 9;
        let board = assemble(&records, &req).unwrap();

        assert_eq!(board.rows().len(), 9);
        assert_eq!(board.rows()[0].display_time, time("09:00"));
        assert_eq!(board.rows()[8].display_time, time("09:08"));
    }

    #[test]
    fn downstream_everywhere_upstream_first_rows_only() {
        let mut records = Vec::new();
        for (i, dep) in ["08:40", "08:50", "09:00"].iter().enumerate() {
            let mut r = record(i as i64, "Dijon", "08:00", "Lyon");
            r.served_stations = vec![
                Stop::new("Beaune", Some(time(dep)), Some(time(dep))),
                Stop::named("Chalon"),
                Stop::named("Mâcon"),
            ];
            records.push(r);
        }

        let board = assemble(&records, &departures("Beaune", "08:30")).unwrap();
        assert_eq!(board.rows().len(), 3);

        for row in board.rows() {
            assert_eq!(
                row.downstream_stations,
                vec!["Chalon".to_string(), "Mâcon".to_string(), "Lyon".to_string()]
            );
        }
        assert_eq!(board.rows()[0].upstream_stations, vec!["Dijon".to_string()]);
        assert_eq!(board.rows()[1].upstream_stations, vec!["Dijon".to_string()]);
        assert!(board.rows()[2].upstream_stations.is_empty());
    }

    #[test]
    fn intermediate_departure_uses_stop_time() {
        let mut r = record(1, "Dijon", "08:00", "Lyon");
        r.served_stations = vec![Stop::new("Beaune", Some(time("08:38")), Some(time("08:40")))];

        let board = assemble(&[r], &departures("Beaune", "08:30")).unwrap();
        assert_eq!(board.rows()[0].display_time, time("08:40"));
        assert_eq!(board.rows()[0].destination_or_origin, "Lyon");
    }

    #[test]
    fn degenerate_record_is_skipped_not_fatal() {
        let looped = record(1, "Dijon", "09:00", "Dijon");
        let fine = record(2, "Dijon", "09:30", "Lyon");

        let board = assemble(&[looped, fine], &departures("Dijon", "08:00")).unwrap();
        assert_eq!(board.rows().len(), 1);
        assert_eq!(board.rows()[0].train_number, "890002");
    }
}
