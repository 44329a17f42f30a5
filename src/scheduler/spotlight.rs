use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use super::periodic::{PeriodicTask, TaskState};
use crate::config::TelemetryConfig;
use crate::sensor::Region;

struct SpotlightState {
    highlighted: Option<Region>,
    next: Region,
}

/// Auto-demo highlight that walks the regions in display order.
///
/// User interaction takes over the highlight and holds the cycle back for
/// the idle period before it resumes.
pub struct Spotlight {
    state: Arc<Mutex<SpotlightState>>,
    task: PeriodicTask,
    idle: Duration,
}

impl Spotlight {
    pub fn new(dwell: Duration, idle: Duration) -> Self {
        let state = Arc::new(Mutex::new(SpotlightState {
            highlighted: None,
            next: Region::ALL[0],
        }));

        let cycle_state = Arc::clone(&state);
        let task = PeriodicTask::new("spotlight", dwell, move || {
            let mut s = cycle_state.lock();
            s.highlighted = Some(s.next);
            s.next = s.next.next();
        });

        Self { state, task, idle }
    }

    pub fn from_config(config: &TelemetryConfig) -> Self {
        Self::new(config.dwell(), config.idle())
    }

    pub fn start(&self) {
        self.task.start();
    }

    /// Stops cycling and drops the highlight.
    pub fn stop(&self) {
        self.task.stop();
        self.state.lock().highlighted = None;
    }

    /// Highlights `region` on behalf of the user and pauses the cycle.
    /// A stopped spotlight only moves the highlight.
    pub fn activate(&self, region: Region) {
        self.state.lock().highlighted = Some(region);
        self.task.pause(self.idle);
    }

    /// User left the body diagram. A stopped spotlight stays stopped.
    pub fn clear(&self) {
        self.state.lock().highlighted = None;
        self.task.pause(self.idle);
    }

    pub fn current(&self) -> Option<Region> {
        self.state.lock().highlighted
    }

    pub fn state(&self) -> TaskState {
        self.task.state()
    }
}
