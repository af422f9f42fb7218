//! STM API response DTOs.
//!
//! These types map directly to the i3 arrivals JSON response. Every
//! field is required: a payload missing any of them is a parse error,
//! never silently defaulted.

use serde::Deserialize;

/// Top-level envelope of the arrivals endpoint: a `result` array of
/// arrival entries, soonest first.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrivalsResponse {
    /// Upcoming arrivals, in the order the API returned them.
    pub result: Vec<ArrivalEntry>,
}

/// One candidate bus arrival.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArrivalEntry {
    /// True if `time` is a live estimate (minutes remaining), false if
    /// it comes from the static timetable (HHMM clock time).
    pub is_real: bool,

    /// Minutes-until-arrival for real-time entries, possibly prefixed
    /// with a `<` marker; a 4-digit HHMM string for scheduled entries.
    /// The two forms are never unit-compatible.
    pub time: String,

    /// Whether this arrival is cancelled.
    pub is_cancelled: bool,

    /// Whether the vehicle is delayed by congestion. Only meaningful
    /// when `is_real` is true.
    pub is_congestion: bool,

    /// Whether the vehicle is currently at the stop.
    pub is_at_stop: bool,
}

/// One fetched, immutable ordered list of arrival entries.
///
/// Valid until explicitly refreshed; replaced wholesale on refresh,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    entries: Vec<ArrivalEntry>,
}

impl ScheduleSnapshot {
    /// Wrap a list of entries, preserving upstream order.
    pub fn new(entries: Vec<ArrivalEntry>) -> Self {
        Self { entries }
    }

    /// The entries in upstream order.
    pub fn entries(&self) -> &[ArrivalEntry] {
        &self.entries
    }

    /// True when the API reported no upcoming arrivals. This is a valid
    /// real-world state, not an error.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<ArrivalsResponse> for ScheduleSnapshot {
    fn from(response: ArrivalsResponse) -> Self {
        Self::new(response.result)
    }
}
