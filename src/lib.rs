//! Countdown Timer - A countdown served over HTTP
//! 
//! This library provides the countdown state machine with an injectable tick
//! scheduler, plus the axum API that lets a page start, pause, resume and
//! reset it.

pub mod config;
pub mod timer;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use timer::{format_display, RunState, TimerController};
pub use state::{AppState, TimerState};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
