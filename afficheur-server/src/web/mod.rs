//! Web layer for the display-board server.
//!
//! Serves the computed boards as JSON to the display pages, which poll
//! every few seconds.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
