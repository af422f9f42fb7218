//! Web layer for the bus status service.
//!
//! One POST endpoint that resolves the configured next-bus query and
//! returns the rendered status as a JSON envelope.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
