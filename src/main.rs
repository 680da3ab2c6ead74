//! Countdown Timer - A countdown served over HTTP
//! 
//! This is the main entry point for the countdown-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_timer::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::tick_driver_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting countdown-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms",
          config.host, config.port, config.tick_ms);

    // Create application state
    let (state, ticks) = AppState::new(config.port, config.host.clone(), config.tick_period());
    let state = Arc::new(state);

    if let Some(duration) = config.duration {
        let outcome = state.set_duration(&duration.to_string())
            .map_err(anyhow::Error::msg)?;
        if !outcome.applied {
            tracing::warn!("Ignoring initial duration {}", duration);
        }
    }

    // Start the tick driver background task
    let driver_state = Arc::clone(&state);
    tokio::spawn(async move {
        tick_driver_task(driver_state, ticks).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /duration - Set countdown duration");
    info!("  POST /start    - Start or resume the countdown");
    info!("  POST /pause    - Pause the countdown");
    info!("  POST /reset    - Reset to the set duration");
    info!("  GET  /status   - Current timer state");
    info!("  GET  /events   - Stream timer updates");
    info!("  GET  /health   - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            result?;
            info!("Shutdown signal received");
        }
    }

    if let Err(e) = state.shutdown() {
        tracing::error!("Failed to tear down countdown: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
