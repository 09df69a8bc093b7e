//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Datelike, Local, Timelike};

use crate::board::{self, BoardError, BoardRequest, Direction, DisplayVariant};
use crate::domain::{BoardTime, StationCategory, Weekday};
use crate::storage::{convert_schedules, StoreError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/board/departures", get(departures_board))
        .route("/board/arrivals", get(arrivals_board))
        .route("/reload", post(reload))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the stations with board data.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    Json(StationsResponse {
        stations: state.store.stations().await,
    })
}

/// Departure board for a station.
async fn departures_board(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardResponse>, AppError> {
    compute_board(&state, query, Direction::Departures).await
}

/// Arrival board for a station.
async fn arrivals_board(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardResponse>, AppError> {
    compute_board(&state, query, Direction::Arrivals).await
}

/// Re-read the data directory.
async fn reload(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.reload(state.data_dir.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fetch, convert and assemble one board.
///
/// The wall clock is read here, once per request, and handed to the engine
/// as data; nothing below this point consults time on its own.
async fn compute_board(
    state: &AppState,
    query: BoardQuery,
    direction: Direction,
) -> Result<Json<BoardResponse>, AppError> {
    let raw = state.store.schedules_for(&query.station).await?;
    let records = convert_schedules(raw);

    let category = state
        .store
        .category_of(&query.station)
        .await
        .unwrap_or(StationCategory::Ville);

    let page_size = query
        .page_size
        .unwrap_or_else(|| DisplayVariant::parse(query.display_type.as_deref()).lines_per_page());

    let now = Local::now();
    let request = BoardRequest {
        station: query.station,
        direction,
        platform: query.platform,
        now: BoardTime::from_hm(now.hour(), now.minute()).map_err(|e| AppError::Internal {
            message: format!("clock out of range: {e}"),
        })?,
        day: Weekday::from(now.weekday()),
        category,
        page_size,
    };

    let board = board::assemble(&records, &request)?;
    Ok(Json(BoardResponse::from(board)))
}

/// Application-level errors mapped to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        AppError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownStation { .. } => AppError::NotFound {
                message: err.to_string(),
            },
            StoreError::Io { .. } | StoreError::Parse { .. } => AppError::Internal {
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
