//! Background tasks module
//! 
//! This module contains the tokio tick source and the task that drives ticks
//! into the shared countdown.

pub mod tick_driver;
pub mod tick_source;

// Re-export main types and functions
pub use tick_driver::tick_driver_task;
pub use tick_source::{TickReceiver, TokioScheduler, TokioTickHandle};
