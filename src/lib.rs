pub mod config;
pub mod error;
pub mod ipc;
pub mod metrics;
pub mod remote;
pub mod scheduler;
pub mod sensor;
pub mod store;
pub mod visualization;

pub use config::{load_config, load_or_default, TelemetryConfig};
pub use error::{Result, TelemetryError};
pub use ipc::{StoreHandle, TelemetryChannels, TickNotice};
pub use metrics::{MetricsReport, TickMetrics};
pub use remote::ReadingsClient;
pub use scheduler::{PeriodicTask, Spotlight, TaskState, TickJob, TickScheduler};
pub use sensor::{
    classify_severity, classify_severity_by_name, Reading, Region, SensorKey, Severity,
    SyntheticGenerator, Thresholds,
};
pub use store::{
    create_store, summarize, tick, to_chart_points, ChartPoint, History, Store, Summary,
    HISTORY_CAPACITY,
};
