//! Timer state snapshot exposed to the rendering layer

use serde::{Deserialize, Serialize};

use crate::timer::{RunState, TickScheduler, TimerController};

/// Everything a view needs to render the countdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Last accepted duration in seconds
    pub duration: Option<u64>,
    pub remaining_seconds: u64,
    pub run_state: RunState,
    /// Remaining time as `MM:SS`
    pub display: String,
    /// "Resume" while paused, otherwise "Start"
    pub start_label: String,
    pub can_start: bool,
    pub can_pause: bool,
    pub can_reset: bool,
    /// The countdown reached zero on its own
    pub finished: bool,
    /// A tick source is live
    pub ticking: bool,
}

impl TimerState {
    /// Capture the current state of a controller
    pub fn capture<S: TickScheduler>(timer: &TimerController<S>) -> Self {
        Self {
            duration: timer.duration(),
            remaining_seconds: timer.remaining(),
            run_state: timer.run_state(),
            display: timer.display(),
            start_label: timer.start_label().to_string(),
            can_start: timer.can_start(),
            can_pause: timer.can_pause(),
            can_reset: timer.can_reset(),
            finished: timer.is_finished(),
            ticking: timer.has_live_tick(),
        }
    }
}
