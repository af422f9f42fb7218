use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;

use bus_server::humanize::RelativeTime;
use bus_server::stm::{Direction, LineId, StmConfig, StopId};
use bus_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Query parameters from the environment, with the stop this service
    // was originally built for as defaults.
    let line = LineId::parse(&env_or("BUS_LINE", "34")).expect("invalid BUS_LINE");
    let stop = StopId::parse(&env_or("BUS_STOP", "53235")).expect("invalid BUS_STOP");
    let direction =
        Direction::parse(&env_or("BUS_DIRECTION", "west")).expect("invalid BUS_DIRECTION");
    let limit: NonZeroU32 = env_or("BUS_LIMIT", "1")
        .parse()
        .expect("BUS_LIMIT must be a positive integer");

    let port: u16 = env_or("PORT", "5000").parse().expect("invalid PORT");

    let state = AppState::new(
        StmConfig::new(),
        line,
        stop,
        direction,
        limit,
        Arc::new(RelativeTime),
    );
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("bus status webhook listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
