//! Countdown timer core
//!
//! The state machine, its display formatting and the tick scheduling seam.
//! Nothing in here knows about HTTP or tokio.

pub mod controller;
pub mod format;
pub mod run_state;
pub mod scheduler;

// Re-export main types
pub use controller::{parse_duration, TimerController, DEFAULT_TICK_PERIOD};
pub use format::format_display;
pub use run_state::RunState;
pub use scheduler::{ManualScheduler, TickId, TickScheduler};
