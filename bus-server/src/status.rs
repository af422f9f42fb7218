//! Arrival-status resolution.
//!
//! Reduces a fetched [`ScheduleSnapshot`] to a single human-readable
//! status line plus the flags it was derived from. Two independent
//! views exist over the same snapshot:
//!
//! - [`next_bus_in_realtime`] scans for the first real-time entry and
//!   exposes its minutes-remaining value numerically;
//! - [`resolve`] renders the textual status from the **first** entry
//!   only, real or scheduled. That single-result policy is deliberate:
//!   the feed is soonest-first and the answer is "the next bus", so
//!   later entries are never consulted.

use crate::humanize::TimeHumanizer;
use crate::stm::{ArrivalEntry, ScheduleSnapshot};

/// Errors from interpreting arrival entry time values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    /// A real-time `time` value was not numeric after stripping the
    /// `<` marker
    #[error("non-numeric realtime minutes value: {0:?}")]
    NonNumericTime(String),

    /// A scheduled `time` value was not a 4-digit HHMM clock time
    #[error("malformed schedule clock time: {0:?}")]
    MalformedClockTime(String),
}

/// A resolved next-bus status.
///
/// The rendered text plus the raw flags of the entry it came from, so
/// callers can build a structured response without re-parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResult {
    /// The composed status line.
    pub text: String,
    /// Whether the entry was a real-time estimate.
    pub is_real: bool,
    /// Whether the arrival is cancelled.
    pub is_cancelled: bool,
    /// Whether congestion was reported (real-time entries only).
    pub is_congestion: bool,
    /// Whether the vehicle is at the stop.
    pub is_at_stop: bool,
}

/// Strip the optional `<` marker ("less than N minutes") and parse the
/// remaining minutes value.
fn realtime_minutes(entry: &ArrivalEntry) -> Result<u32, StatusError> {
    entry
        .time
        .trim_start_matches('<')
        .parse()
        .map_err(|_| StatusError::NonNumericTime(entry.time.clone()))
}

/// Split a 4-digit HHMM string into hour and minute.
fn clock_time(entry: &ArrivalEntry) -> Result<(u32, u32), StatusError> {
    let malformed = || StatusError::MalformedClockTime(entry.time.clone());

    if entry.time.len() != 4 || !entry.time.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let hour = entry.time[..2].parse().map_err(|_| malformed())?;
    let minute = entry.time[2..].parse().map_err(|_| malformed())?;
    Ok((hour, minute))
}

/// Minutes until the next bus with a live estimate.
///
/// Scans the snapshot in order for the first `is_real` entry. Returns
/// `Ok(None)` when no real-time entry exists; scheduled entries are
/// never converted into a minutes value, the two are not
/// unit-compatible.
pub fn next_bus_in_realtime(snapshot: &ScheduleSnapshot) -> Result<Option<u32>, StatusError> {
    for entry in snapshot.entries() {
        if entry.is_real {
            return realtime_minutes(entry).map(Some);
        }
    }
    Ok(None)
}

/// Resolve the snapshot to a rendered status line.
///
/// Only the first entry is consulted. A cancelled first entry still
/// produces a status describing that cancelled bus; the resolver never
/// skips ahead looking for a viable one. An empty snapshot resolves to
/// `Ok(None)`, which is the valid "no buses scheduled" state and not
/// an error.
pub fn resolve(
    snapshot: &ScheduleSnapshot,
    humanizer: &dyn TimeHumanizer,
) -> Result<Option<StatusResult>, StatusError> {
    let Some(entry) = snapshot.entries().first() else {
        return Ok(None);
    };

    let mut text = if entry.is_real {
        format!("Realtime:  {} minutes", realtime_minutes(entry)?)
    } else {
        let (hour, minute) = clock_time(entry)?;
        let mut text = format!(
            "Scheduled: {} hour {} minutes",
            &entry.time[..2],
            &entry.time[2..]
        );
        if let Some(phrase) = humanizer.phrase(hour, minute) {
            text.push_str(&format!(" ({phrase})"));
        }
        text
    };

    if entry.is_cancelled {
        text.push_str(" but is CANCELLED! :(");
    }

    if entry.is_real && entry.is_congestion {
        text.push_str(" (but there is congestion!)");
    }

    if entry.is_at_stop {
        text.push_str(" and IT IS AT THE STOP! (GO GO GO!!)");
    }

    Ok(Some(StatusResult {
        text,
        is_real: entry.is_real,
        is_cancelled: entry.is_cancelled,
        is_congestion: entry.is_congestion,
        is_at_stop: entry.is_at_stop,
    }))
}
