//! Status and platform resolution for a single board row.
//!
//! Status is a pure function of the record (see [`TrainStatus::resolve`]).
//! The platform is time-gated: it only appears once the train is close
//! enough to `now`, with the window depending on the station's category.
//! City stations withhold the platform until 30 minutes before the
//! displayed time; intercity stations reveal it up to 12 hours ahead.

use crate::domain::{BoardTime, ScheduleRecord, StationCategory};

/// Resolve the platform to show for a row, if any.
///
/// Returns the station's explicit assignment (falling back to the record's
/// general track) only when `display_time` lies within the category's
/// reveal window relative to `now`. Outside the window, or when the record
/// names no platform at all, returns `None` and the board shows a blank
/// cell.
pub fn platform(
    record: &ScheduleRecord,
    station: &str,
    display_time: BoardTime,
    now: BoardTime,
    category: StationCategory,
) -> Option<String> {
    let minutes = display_time.minutes_until(now);
    if minutes < 0 || minutes > category.reveal_window_minutes() {
        return None;
    }
    record.platform_at(station).map(str::to_string)
}


#[cfg(test)]
mod proptests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{Circulation, Stop};
    use proptest::prelude::*;

    fn arb_time() -> impl Strategy<Value = BoardTime> {
        (0u32..24, 0u32..60).prop_map(|(h, m)| BoardTime::from_hm(h, m).unwrap())
    }

    fn assigned_record() -> ScheduleRecord {
        ScheduleRecord {
            id: 1,
            train_number: "1".into(),
            train_type: "TER".into(),
            departure_station: "A".into(),
            arrival_station: "B".into(),
            departure_time: None,
            arrival_time: None,
            served_stations: vec![Stop::named("A")],
            track_assignments: HashMap::from([("A".to_string(), "1".to_string())]),
            track: None,
            circulation: Circulation::every_day(),
            delay_minutes: 0,
            is_cancelled: false,
        }
    }

    proptest! {
        /// A platform is shown exactly when the time difference is within
        /// the category window and not in the past.
        #[test]
        fn shown_iff_within_window(now in arb_time(), display in arb_time()) {
            let r = assigned_record();
            for category in [StationCategory::Ville, StationCategory::Interurbain] {
                let shown = platform(&r, "A", display, now, category).is_some();
                let minutes = display.minutes_until(now);
                let expected = minutes >= 0 && minutes <= category.reveal_window_minutes();
                prop_assert_eq!(shown, expected);
            }
        }

        /// The intercity window is never narrower than the city window.
        #[test]
        fn intercity_shows_whenever_city_does(now in arb_time(), display in arb_time()) {
            let r = assigned_record();
            let city = platform(&r, "A", display, now, StationCategory::Ville);
            let inter = platform(&r, "A", display, now, StationCategory::Interurbain);
            if city.is_some() {
                prop_assert!(inter.is_some());
            }
        }
    }
}
