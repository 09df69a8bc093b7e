//! Train status resolution.

use serde::Serialize;

use super::ScheduleRecord;

/// Display status of a train on a board.
///
/// Three terminal states with no transitions; the status is recomputed
/// fresh from the record's flags on every board refresh. Cancellation has
/// the highest priority: a cancelled train with an announced delay is
/// still shown as cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainStatus {
    OnTime,
    Delayed,
    Cancelled,
}

impl TrainStatus {
    /// Resolve the status from a record's flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use afficheur_server::domain::TrainStatus;
    ///
    /// assert_eq!(TrainStatus::resolve(false, 0), TrainStatus::OnTime);
    /// assert_eq!(TrainStatus::resolve(false, 5), TrainStatus::Delayed);
    /// assert_eq!(TrainStatus::resolve(true, 15), TrainStatus::Cancelled);
    /// ```
    pub fn resolve(is_cancelled: bool, delay_minutes: u32) -> Self {
        if is_cancelled {
            TrainStatus::Cancelled
        } else if delay_minutes > 0 {
            TrainStatus::Delayed
        } else {
            TrainStatus::OnTime
        }
    }

    /// Resolve the status for a record.
    pub fn of(record: &ScheduleRecord) -> Self {
        Self::resolve(record.is_cancelled, record.delay_minutes)
    }
}
