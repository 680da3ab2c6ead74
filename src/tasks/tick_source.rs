//! Tokio-backed tick source

use std::time::Duration;
use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::debug;

use crate::timer::{TickId, TickScheduler};

/// Ticks queued for the driver before further ticks are dropped
pub const TICK_QUEUE_CAPACITY: usize = 4;

/// Receiving end of the tick channel, consumed by the tick driver
pub type TickReceiver = mpsc::Receiver<TickId>;

/// Schedules repeating ticks as tokio tasks that report on a channel
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tick_tx: mpsc::Sender<TickId>,
}

/// Live tick task; aborted when cancelled or dropped
#[derive(Debug)]
pub struct TokioTickHandle {
    id: TickId,
    task: JoinHandle<()>,
}

impl TokioScheduler {
    /// Create a scheduler and the receiver its ticks arrive on
    pub fn channel() -> (Self, TickReceiver) {
        let (tick_tx, tick_rx) = mpsc::channel(TICK_QUEUE_CAPACITY);
        (Self { tick_tx }, tick_rx)
    }
}

impl TickScheduler for TokioScheduler {
    type Handle = TokioTickHandle;

    fn schedule_repeating(&mut self, id: TickId, period: Duration) -> TokioTickHandle {
        let tick_tx = self.tick_tx.clone();
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                match tick_tx.try_send(id) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        debug!("Tick queue full, dropping {}", id);
                    }
                    Err(TrySendError::Closed(_)) => {
                        debug!("Tick receiver closed, stopping {}", id);
                        break;
                    }
                }
            }
        });

        TokioTickHandle { id, task }
    }

    fn cancel(&mut self, handle: TokioTickHandle) {
        debug!("Cancelling tick task {}", handle.id);
        drop(handle);
    }
}

impl Drop for TokioTickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
