//! Route model: the ordered stop sequence of one schedule.
//!
//! Storage records are entered by hand and imported from spreadsheets, so
//! their stop sequences are not always well formed: the arrival station may
//! be redundantly listed among the served stations, missing from them
//! entirely, or a stop may appear twice. Building a `Route` repairs all of
//! this once, up front, so every later pipeline stage can rely on the
//! invariants below instead of re-sniffing the record.

use std::collections::HashMap;

use super::{ScheduleRecord, Stop};

/// The ordered list of stops for one schedule, first to last, with a
/// name-to-position lookup.
///
/// # Invariants
///
/// - The first stop is the record's declared departure station.
/// - The last stop is the record's declared arrival station.
/// - Every stop name appears exactly once.
///
/// A record whose departure and arrival station coincide produces a
/// degenerate single-stop route; such a value is safe to hold but is never
/// eligible for a board.
#[derive(Debug, Clone)]
pub struct Route {
    stops: Vec<Stop>,
    positions: HashMap<String, usize>,
}

impl Route {
    /// Build the route for a record, repairing malformed stop sequences.
    ///
    /// The sequence is `[departure_station] + served_stations`, with
    /// duplicate names dropped (first occurrence wins). If the declared
    /// arrival station occurs in that sequence, everything after it is
    /// discarded; otherwise it is appended as the final stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use afficheur_server::domain::{Route, ScheduleRecord, Stop, Circulation};
    ///
    /// let record = ScheduleRecord {
    ///     id: 1,
    ///     train_number: "6603".into(),
    ///     train_type: "TGV INOUI".into(),
    ///     departure_station: "Paris Gare de Lyon".into(),
    ///     arrival_station: "Marseille St-Charles".into(),
    ///     departure_time: None,
    ///     arrival_time: None,
    ///     served_stations: vec![Stop::named("Avignon TGV")],
    ///     track_assignments: Default::default(),
    ///     track: None,
    ///     circulation: Circulation::every_day(),
    ///     delay_minutes: 0,
    ///     is_cancelled: false,
    /// };
    ///
    /// let route = Route::build(&record);
    /// assert_eq!(route.first().unwrap().name, "Paris Gare de Lyon");
    /// assert_eq!(route.last().unwrap().name, "Marseille St-Charles");
    /// assert_eq!(route.position_of("Avignon TGV"), Some(1));
    /// ```
    pub fn build(record: &ScheduleRecord) -> Self {
        let mut stops: Vec<Stop> = Vec::with_capacity(record.served_stations.len() + 2);
        let mut seen: HashMap<String, usize> = HashMap::new();

        let head = Stop::new(
            record.departure_station.clone(),
            None,
            record.departure_time,
        );
        seen.insert(head.name.clone(), 0);
        stops.push(head);

        for stop in &record.served_stations {
            if seen.contains_key(&stop.name) {
                continue;
            }
            seen.insert(stop.name.clone(), stops.len());
            stops.push(stop.clone());
        }

        match seen.get(&record.arrival_station).copied() {
            Some(idx) => {
                // Declared terminus found mid-sequence: discard the tail.
                stops.truncate(idx + 1);
                seen.retain(|_, pos| *pos <= idx);
            }
            None => {
                seen.insert(record.arrival_station.clone(), stops.len());
                stops.push(Stop::new(
                    record.arrival_station.clone(),
                    record.arrival_time,
                    None,
                ));
            }
        }

        // The terminus inherits the journey's overall arrival time when the
        // record did not supply a per-stop one.
        if let Some(last) = stops.last_mut() {
            if last.arrival.is_none() {
                last.arrival = record.arrival_time;
            }
        }

        Self {
            stops,
            positions: seen,
        }
    }

    /// All stops, first to last.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// True when the route has no stops (never produced by `build`).
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// True for single-stop routes, which are board-ineligible.
    pub fn is_degenerate(&self) -> bool {
        self.stops.len() < 2
    }

    /// Position of a station on the route, if it is served.
    pub fn position_of(&self, station: &str) -> Option<usize> {
        self.positions.get(station).copied()
    }

    /// The first stop (origin).
    pub fn first(&self) -> Option<&Stop> {
        self.stops.first()
    }

    /// The last stop (terminus).
    pub fn last(&self) -> Option<&Stop> {
        self.stops.last()
    }

    /// Stop at a given position.
    pub fn stop_at(&self, idx: usize) -> Option<&Stop> {
        self.stops.get(idx)
    }

    /// Names of the stops strictly after `idx`, through the terminus.
    pub fn downstream_names(&self, idx: usize) -> Vec<String> {
        self.stops
            .iter()
            .skip(idx + 1)
            .map(|s| s.name.clone())
            .collect()
    }

    /// Names of the stops strictly before `idx`, from the origin.
    pub fn upstream_names(&self, idx: usize) -> Vec<String> {
        self.stops
            .iter()
            .take(idx)
            .map(|s| s.name.clone())
            .collect()
    }
}
