//! Station display-board server.
//!
//! Computes real-time departure and arrival boards per station (optionally
//! per platform) from stored schedule records. The engine in [`board`] is a
//! pure pipeline; [`storage`] supplies the records and [`web`] exposes the
//! boards as JSON to the display pages.

pub mod board;
pub mod domain;
pub mod storage;
pub mod web;
