//! Scheduler module - Cancellable timers driving ticks and the auto-demo spotlight

pub mod periodic;
pub mod spotlight;
pub mod tick_task;

pub use periodic::{PeriodicTask, TaskState};
pub use spotlight::Spotlight;
pub use tick_task::{TickJob, TickScheduler};
