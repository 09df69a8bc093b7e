//! Storage collaborator boundary.
//!
//! Raw schedule rows arrive from a storage service whose columns have
//! accumulated several shapes over the years; this module tolerates all of
//! them, converts to the domain model once, and serves the result to the
//! board pipeline.

mod convert;
mod error;
mod store;
mod types;

pub use convert::{ConvertError, convert_schedule, convert_schedules};
pub use error::StoreError;
pub use store::JsonStore;
pub use types::{Flag, MaybeEncoded, RawSchedule, RawStop, RawStopDetail};
