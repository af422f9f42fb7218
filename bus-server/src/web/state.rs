//! Application state for the web layer.

use std::num::NonZeroU32;
use std::sync::Arc;

use crate::humanize::TimeHumanizer;
use crate::stm::{Direction, LineId, StmConfig, StopId};

/// Shared application state.
///
/// Holds the fixed query parameters and client configuration; each
/// request constructs its own `ArrivalClient` from these, so no fetch
/// state is shared between invocations.
#[derive(Clone)]
pub struct AppState {
    /// STM client configuration
    pub config: Arc<StmConfig>,

    /// Bus line to query
    pub line: LineId,

    /// Stop to query
    pub stop: StopId,

    /// Direction of travel
    pub direction: Direction,

    /// Maximum number of arrival entries to request
    pub limit: NonZeroU32,

    /// Relative-time phrasing for scheduled entries
    pub humanizer: Arc<dyn TimeHumanizer>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        config: StmConfig,
        line: LineId,
        stop: StopId,
        direction: Direction,
        limit: NonZeroU32,
        humanizer: Arc<dyn TimeHumanizer>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            line,
            stop,
            direction,
            limit,
            humanizer,
        }
    }
}
