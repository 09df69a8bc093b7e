//! The board engine.
//!
//! A stateless pipeline turning stored schedule records into the rows a
//! departure or arrival display shows. Every stage is a pure function; the
//! current time and weekday arrive in the [`BoardRequest`], so callers own
//! the clock and every computation is reproducible.

mod assemble;
mod config;
mod relevance;
mod request;
mod resolve;
mod window;

pub use assemble::{assemble, Board, DisplayRow};
pub use config::DisplayVariant;
pub use request::{BoardError, BoardRequest, Direction};
