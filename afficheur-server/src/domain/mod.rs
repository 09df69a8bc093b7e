//! Domain types for the display-board engine.
//!
//! This module contains the validated core model: wall-clock times, the
//! weekday/circulation vocabulary, schedule records and the routes derived
//! from them. Types enforce their invariants at construction time, so the
//! board pipeline can trust any value it receives.

mod day;
mod record;
mod route;
mod station;
mod status;
mod stop;
mod time;

pub use day::{Circulation, Weekday};
pub use record::ScheduleRecord;
pub use route::Route;
pub use station::StationCategory;
pub use status::TrainStatus;
pub use stop::Stop;
pub use time::{BoardTime, TimeError};
