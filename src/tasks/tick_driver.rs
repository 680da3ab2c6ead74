//! Tick driver background task

use std::sync::Arc;
use tracing::{error, info};

use crate::{state::AppState, tasks::TickReceiver};

/// Background task that feeds scheduled ticks into the countdown
pub async fn tick_driver_task(state: Arc<AppState>, mut ticks: TickReceiver) {
    info!("Starting tick driver task");

    while let Some(id) = ticks.recv().await {
        if let Err(e) = state.tick(id) {
            error!("Failed to apply {}: {}", id, e);
        }
    }

    info!("Tick channel closed, tick driver stopping");
}
