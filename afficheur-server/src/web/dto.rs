//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::board::{Board, DisplayRow};
use crate::domain::TrainStatus;

/// Query parameters for a board request.
#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    /// Station the display is mounted at.
    pub station: String,

    /// Restrict to trains explicitly assigned to this platform.
    pub platform: Option<String>,

    /// Display variant ("normal", "defilement"); decides the page size.
    #[serde(rename = "type")]
    pub display_type: Option<String>,

    /// Explicit page size, overriding the display variant.
    pub page_size: Option<usize>,
}

/// One row of a board response.
#[derive(Debug, Serialize)]
pub struct RowDto {
    pub train_number: String,
    pub train_type: String,
    pub time: String,
    pub destination_or_origin: String,
    pub platform: Option<String>,
    pub status: TrainStatus,
    pub delay_minutes: u32,
    pub downstream_stations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub upstream_stations: Vec<String>,
}

impl From<DisplayRow> for RowDto {
    fn from(row: DisplayRow) -> Self {
        Self {
            train_number: row.train_number,
            train_type: row.train_type,
            time: row.display_time.to_string(),
            destination_or_origin: row.destination_or_origin,
            platform: row.platform,
            status: row.status,
            delay_minutes: row.delay_minutes,
            downstream_stations: row.downstream_stations,
            upstream_stations: row.upstream_stations,
        }
    }
}

/// A computed board, as returned to displays.
///
/// `no_service` is a valid board state, distinct from any error response:
/// it tells the display to show its idle screen rather than retry.
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BoardResponse {
    NoService,
    Ok { rows: Vec<RowDto> },
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        match board {
            Board::NoService => BoardResponse::NoService,
            Board::Rows(rows) => BoardResponse::Ok {
                rows: rows.into_iter().map(RowDto::from).collect(),
            },
        }
    }
}

/// Response listing the stations with board data.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
