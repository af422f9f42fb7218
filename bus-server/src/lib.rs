//! Next-bus arrival status service.
//!
//! Answers "when is the next bus arriving at a given stop, in a given
//! direction, on a given line?" by querying the STM arrivals API and
//! reducing its mixed real-time/scheduled result to a single status
//! line, served over one webhook endpoint.

pub mod humanize;
pub mod status;
pub mod stm;
pub mod web;
