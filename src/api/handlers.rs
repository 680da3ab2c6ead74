//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc};
use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream};
use tracing::{error, info};

use crate::state::{ActionOutcome, AppState};
use super::responses::{ApiResponse, DurationRequest, HealthResponse, StatusResponse};

fn respond(
    action: &str,
    result: Result<ActionOutcome, String>,
    applied: &str,
    ignored: &str,
) -> Result<Json<ApiResponse>, StatusCode> {
    match result {
        Ok(outcome) if outcome.applied => {
            info!("{} endpoint called - {}", action, applied);
            Ok(Json(ApiResponse::applied(applied.to_string(), outcome.timer)))
        }
        Ok(outcome) => {
            info!("{} endpoint called - ignored: {}", action, ignored);
            Ok(Json(ApiResponse::ignored(ignored.to_string(), outcome.timer)))
        }
        Err(e) => {
            error!("Failed to {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /duration - Set the countdown duration
pub async fn duration_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DurationRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let input = request.input_text();
    respond(
        "set",
        state.set_duration(&input),
        "Duration set",
        "Duration must be a positive whole number of seconds",
    )
}

/// Handle POST /start - Start or resume the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    respond(
        "start",
        state.start(),
        "Countdown running",
        "Nothing to start: no time remaining or already running",
    )
}

/// Handle POST /pause - Pause the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    respond(
        "pause",
        state.pause(),
        "Countdown paused",
        "Countdown is not running",
    )
}

/// Handle POST /reset - Reset the countdown to its duration
///
/// Reset is unconditional, so it is always reported as applied.
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset() {
        Ok(outcome) => {
            info!("reset endpoint called - countdown reset to {}", outcome.timer.display);
            Ok(Json(ApiResponse::applied("Countdown reset".to_string(), outcome.timer)))
        }
        Err(e) => {
            error!("Failed to reset: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /events - Stream timer updates as server-sent events
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let updates = state.subscribe();

    // The current state is sent first, then one event per change
    let stream = stream::unfold((updates, true), |(mut updates, first)| async move {
        if !first && updates.changed().await.is_err() {
            return None;
        }
        let timer = updates.borrow_and_update().clone();
        let event = Event::default()
            .event("timer")
            .json_data(&timer)
            .unwrap_or_else(|e| Event::default().event("error").data(e.to_string()));
        Some((Ok(event), (updates, false)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
