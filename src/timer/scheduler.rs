//! Tick source abstraction
//!
//! The controller never owns a clock. It asks a [`TickScheduler`] for a
//! repeating tick and is handed ticks back by whoever drives the scheduler.

use std::time::Duration;

/// Generation number identifying one acquired tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickId(pub u64);

impl std::fmt::Display for TickId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tick#{}", self.0)
    }
}

/// Capability to schedule and cancel a repeating tick
pub trait TickScheduler {
    /// Ownership token of a live tick source
    type Handle;

    /// Begin delivering `id` every `period` until cancelled
    fn schedule_repeating(&mut self, id: TickId, period: Duration) -> Self::Handle;

    /// Stop the tick source behind `handle`
    fn cancel(&mut self, handle: Self::Handle);
}

/// Scheduler that only records registrations.
///
/// Nothing fires on its own; callers read [`ManualScheduler::live_ticks`] and
/// deliver ticks to the controller themselves.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    live: Vec<(TickId, Duration)>,
    scheduled_total: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the tick sources that have not been cancelled
    pub fn live_ticks(&self) -> Vec<TickId> {
        self.live.iter().map(|(id, _)| *id).collect()
    }

    /// Period requested for a live tick source
    pub fn period_of(&self, id: TickId) -> Option<Duration> {
        self.live
            .iter()
            .find(|(live_id, _)| *live_id == id)
            .map(|(_, period)| *period)
    }

    /// Number of tick sources ever scheduled
    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total
    }
}

impl TickScheduler for ManualScheduler {
    type Handle = TickId;

    fn schedule_repeating(&mut self, id: TickId, period: Duration) -> TickId {
        self.live.push((id, period));
        self.scheduled_total += 1;
        id
    }

    fn cancel(&mut self, handle: TickId) {
        self.live.retain(|(id, _)| *id != handle);
    }
}
