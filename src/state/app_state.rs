//! Main application state management

use std::{
    sync::Mutex,
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use super::TimerState;
use crate::{
    tasks::{TickReceiver, TokioScheduler},
    timer::{TickId, TimerController},
};

/// Result of a user action against the countdown
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    /// Whether the action changed anything
    pub applied: bool,
    pub timer: TimerState,
}

/// Main application state that owns the countdown and server metadata
#[derive(Debug)]
pub struct AppState {
    /// The countdown; every action and tick goes through this lock
    pub timer: Mutex<TimerController<TokioScheduler>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Channel for timer updates
    pub timer_update_tx: watch::Sender<TimerState>,
}

impl AppState {
    /// Create a new AppState with an idle countdown.
    ///
    /// The returned receiver carries scheduled ticks and must be handed to
    /// the tick driver task.
    pub fn new(port: u16, host: String, tick_period: Duration) -> (Self, TickReceiver) {
        let (scheduler, tick_rx) = TokioScheduler::channel();
        let timer = TimerController::with_period(scheduler, tick_period);
        let (timer_update_tx, _) = watch::channel(TimerState::capture(&timer));

        let state = Self {
            timer: Mutex::new(timer),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            timer_update_tx,
        };
        (state, tick_rx)
    }

    /// Apply an action to the countdown and publish the result
    pub fn apply_action<F>(&self, action: &str, op: F) -> Result<ActionOutcome, String>
    where
        F: FnOnce(&mut TimerController<TokioScheduler>) -> bool,
    {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        let applied = op(&mut *timer);
        let new_state = TimerState::capture(&*timer);
        drop(timer); // Release the lock early

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        if applied {
            self.publish(new_state.clone());
        } else {
            debug!("Action '{}' ignored in state {}", action, new_state.run_state);
        }

        Ok(ActionOutcome { applied, timer: new_state })
    }

    /// Set the countdown duration from raw input
    pub fn set_duration(&self, input: &str) -> Result<ActionOutcome, String> {
        info!("Setting duration from input: {:?}", input);
        self.apply_action("set", |timer| timer.set_duration(input))
    }

    /// Start or resume the countdown
    pub fn start(&self) -> Result<ActionOutcome, String> {
        self.apply_action("start", |timer| timer.start())
    }

    /// Pause the countdown
    pub fn pause(&self) -> Result<ActionOutcome, String> {
        self.apply_action("pause", |timer| timer.pause())
    }

    /// Reset the countdown to its duration
    pub fn reset(&self) -> Result<ActionOutcome, String> {
        self.apply_action("reset", |timer| timer.reset())
    }

    /// Deliver a scheduled tick; returns whether it was applied
    pub fn tick(&self, id: TickId) -> Result<bool, String> {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        let applied = timer.on_tick(id);
        let new_state = TimerState::capture(&*timer);
        drop(timer);

        if applied {
            self.publish(new_state);
        }
        Ok(applied)
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer.lock()
            .map(|timer| TimerState::capture(&*timer))
            .map_err(|e| format!("Failed to lock timer: {}", e))
    }

    /// Watch timer updates, starting from the latest published state
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.timer_update_tx.subscribe()
    }

    /// Release the tick source before the process exits
    pub fn shutdown(&self) -> Result<(), String> {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        timer.teardown();
        let new_state = TimerState::capture(&*timer);
        drop(timer);

        self.publish(new_state);
        info!("Countdown torn down");
        Ok(())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn publish(&self, new_state: TimerState) {
        // send_replace keeps the latest value even with no subscribers
        self.timer_update_tx.send_replace(new_state);
    }
}
