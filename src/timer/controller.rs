//! Countdown controller state machine

use std::time::Duration;
use tracing::{debug, info};

use super::{format_display, RunState, TickId, TickScheduler};

/// Default interval between ticks
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Parse raw duration input into a positive number of seconds.
///
/// Any numeric notation is accepted as long as it denotes a whole number,
/// so `90`, `90.0`, `60.` and `1e3` all parse while `2.5` does not.
pub fn parse_duration(input: &str) -> Option<u64> {
    let input = input.trim();
    if let Ok(seconds) = input.parse::<u64>() {
        return (seconds > 0).then_some(seconds);
    }

    let seconds = input.parse::<f64>().ok()?;
    if seconds.is_finite() && seconds.fract() == 0.0 && seconds > 0.0 && seconds <= u64::MAX as f64 {
        Some(seconds as u64)
    } else {
        None
    }
}

/// Owns the countdown and the single tick source driving it.
///
/// Invalid input and actions taken in the wrong state are no-ops; every
/// action reports whether it changed anything.
#[derive(Debug)]
pub struct TimerController<S: TickScheduler> {
    scheduler: S,
    period: Duration,
    duration: Option<u64>,
    remaining: u64,
    run_state: RunState,
    finished: bool,
    tick: Option<(TickId, S::Handle)>,
    next_tick_id: u64,
}

impl<S: TickScheduler> TimerController<S> {
    /// Create an idle controller ticking once per second
    pub fn new(scheduler: S) -> Self {
        Self::with_period(scheduler, DEFAULT_TICK_PERIOD)
    }

    /// Create an idle controller with a custom tick period
    pub fn with_period(scheduler: S, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            duration: None,
            remaining: 0,
            run_state: RunState::Idle,
            finished: false,
            tick: None,
            next_tick_id: 0,
        }
    }

    /// Set a new duration from raw input and return to idle
    pub fn set_duration(&mut self, input: &str) -> bool {
        let Some(seconds) = parse_duration(input) else {
            debug!("Ignoring invalid duration input: {:?}", input);
            return false;
        };

        self.release_tick();
        self.duration = Some(seconds);
        self.remaining = seconds;
        self.run_state = RunState::Idle;
        self.finished = false;
        info!("Duration set to {}s", seconds);
        true
    }

    /// Start or resume the countdown
    pub fn start(&mut self) -> bool {
        if self.remaining == 0 {
            debug!("Ignoring start with no time remaining");
            return false;
        }
        if self.run_state.is_running() {
            debug!("Ignoring start while already running");
            return false;
        }

        let resumed = self.run_state.is_paused();
        self.acquire_tick();
        self.run_state = RunState::Running;
        info!(
            "Countdown {} at {}",
            if resumed { "resumed" } else { "started" },
            format_display(self.remaining)
        );
        true
    }

    /// Pause a running countdown
    pub fn pause(&mut self) -> bool {
        if !self.run_state.is_running() {
            debug!("Ignoring pause while {}", self.run_state);
            return false;
        }

        self.release_tick();
        self.run_state = RunState::Paused;
        info!("Countdown paused at {}", format_display(self.remaining));
        true
    }

    /// Return to idle with the full duration remaining
    pub fn reset(&mut self) -> bool {
        self.release_tick();
        self.run_state = RunState::Idle;
        self.remaining = self.duration.unwrap_or(0);
        self.finished = false;
        info!("Countdown reset to {}", format_display(self.remaining));
        true
    }

    /// Handle one tick delivered by the scheduler.
    ///
    /// Ticks from a released source are ignored.
    pub fn on_tick(&mut self, id: TickId) -> bool {
        if self.live_tick_id() != Some(id) || !self.run_state.is_running() {
            debug!("Dropping stale {}", id);
            return false;
        }

        if self.remaining <= 1 {
            self.remaining = 0;
            self.release_tick();
            self.run_state = RunState::Idle;
            self.finished = true;
            info!("Countdown finished");
        } else {
            self.remaining -= 1;
            debug!("{} -> {}", id, format_display(self.remaining));
        }
        true
    }

    /// Release the tick source; the controller stays usable
    pub fn teardown(&mut self) {
        if self.tick.is_some() {
            info!("Tearing down countdown tick source");
        }
        self.release_tick();
        if self.run_state.is_running() {
            self.run_state = RunState::Paused;
        }
    }

    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_display(self.remaining)
    }

    /// Label for the start button
    pub fn start_label(&self) -> &'static str {
        if self.run_state.is_paused() {
            "Resume"
        } else {
            "Start"
        }
    }

    pub fn can_start(&self) -> bool {
        self.remaining > 0 && !self.run_state.is_running()
    }

    pub fn can_pause(&self) -> bool {
        self.run_state.is_running()
    }

    pub fn can_reset(&self) -> bool {
        true
    }

    /// Whether the last countdown ran out on its own
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn has_live_tick(&self) -> bool {
        self.tick.is_some()
    }

    pub fn live_tick_id(&self) -> Option<TickId> {
        self.tick.as_ref().map(|(id, _)| *id)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn acquire_tick(&mut self) {
        self.release_tick();
        self.next_tick_id += 1;
        let id = TickId(self.next_tick_id);
        let handle = self.scheduler.schedule_repeating(id, self.period);
        debug!("Acquired {} every {:?}", id, self.period);
        self.tick = Some((id, handle));
    }

    fn release_tick(&mut self) {
        if let Some((id, handle)) = self.tick.take() {
            self.scheduler.cancel(handle);
            debug!("Released {}", id);
        }
    }
}

impl<S: TickScheduler> Drop for TimerController<S> {
    fn drop(&mut self) {
        self.release_tick();
    }
}
