//! IPC module - Snapshot sharing between the tick job and its observers

pub mod channels;
pub mod shared_resource;

pub use channels::{TelemetryChannels, TickNotice};
pub use shared_resource::StoreHandle;
