//! STM i3 arrivals API client.
//!
//! This module provides an HTTP client for the STM (Société de transport
//! de Montréal) public i3 API, which reports upcoming bus arrivals for a
//! (line, stop, direction) triple.
//!
//! Key characteristics of the API:
//! - The `result` array mixes **real-time** entries (minutes remaining,
//!   possibly prefixed with a `<` marker) and **scheduled** entries
//!   (4-digit HHMM clock times); the two are never unit-compatible
//! - Entries arrive soonest-first; no re-sorting is done on our side
//! - The endpoint expects browser-like `Origin`/`Referer`/`User-Agent`
//!   headers, built from the same line/stop/direction as the query

mod client;
mod error;
mod query;
mod types;

pub use client::{ArrivalClient, StmConfig};
pub use error::ArrivalsError;
pub use query::{ArrivalQuery, Direction, InvalidDirection, InvalidId, LineId, StopId};
pub use types::{ArrivalEntry, ArrivalsResponse, ScheduleSnapshot};
