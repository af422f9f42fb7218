//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::error;

use crate::status::{self, StatusError};
use crate::stm::{ArrivalClient, ArrivalQuery, ArrivalsError};

use super::dto::{ErrorResponse, WebhookResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .route("/health", get(health))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve the configured next-bus query and return the status envelope.
///
/// A fresh client is built per request: the query date must be today's,
/// and the snapshot cache is scoped to a single client instance.
async fn webhook(State(state): State<AppState>) -> Result<Json<WebhookResponse>, AppError> {
    let query = ArrivalQuery::new(
        state.line.clone(),
        state.stop.clone(),
        state.direction,
        state.limit,
    );

    let client = ArrivalClient::new(state.config.as_ref().clone(), query)?;
    let snapshot = client.snapshot(false).await?;
    let resolved = status::resolve(&snapshot, state.humanizer.as_ref())?;

    Ok(Json(WebhookResponse::from_status(
        resolved.map(|s| s.text),
    )))
}

/// Application error type.
///
/// Transit-API failures are the upstream's fault (502); a response we
/// cannot interpret is ours (500). An empty schedule is not an error
/// and never reaches this type.
#[derive(Debug)]
pub enum AppError {
    Unavailable { message: String },
    Internal { message: String },
}

impl From<ArrivalsError> for AppError {
    fn from(e: ArrivalsError) -> Self {
        match e {
            ArrivalsError::Network(_) | ArrivalsError::Upstream { .. } => AppError::Unavailable {
                message: e.to_string(),
            },
            ArrivalsError::Parse { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<StatusError> for AppError {
    fn from(e: StatusError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Unavailable { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "webhook request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
