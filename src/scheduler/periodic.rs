use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tracing::debug;

type Job = Box<dyn FnMut() + Send + 'static>;

/// Shortest accepted period; `interval_at` rejects a zero period.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Stopped,
    /// Cancelled for now, restarts on its own
    Paused,
    Running,
}

struct Active {
    handle: JoinHandle<()>,
    resume_at: Instant,
}

/// A job run every `period` on the tokio runtime, behind one cancellable handle.
///
/// `start`, `pause` and `stop` must be called from within a tokio runtime.
/// Dropping the task cancels it.
pub struct PeriodicTask {
    name: &'static str,
    period: Duration,
    job: Arc<Mutex<Job>>,
    active: Mutex<Option<Active>>,
}

impl PeriodicTask {
    pub fn new<F>(name: &'static str, period: Duration, job: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self {
            name,
            period: period.max(MIN_PERIOD),
            job: Arc::new(Mutex::new(Box::new(job))),
            active: Mutex::new(None),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// (Re)starts the loop; the first run happens one period from now.
    pub fn start(&self) {
        self.schedule(Duration::ZERO);
        debug!(task = self.name, period_ms = self.period.as_millis() as u64, "started");
    }

    /// Cancels the loop now and restarts it after `duration`.
    ///
    /// No-op unless the task was started and not stopped since.
    pub fn pause(&self, duration: Duration) {
        if self.active.lock().is_none() {
            return;
        }
        self.schedule(duration);
        debug!(task = self.name, pause_ms = duration.as_millis() as u64, "paused");
    }

    /// Cancels the loop. Nothing runs until the next `start`.
    pub fn stop(&self) {
        if let Some(active) = self.active.lock().take() {
            active.handle.abort();
            debug!(task = self.name, "stopped");
        }
    }

    pub fn state(&self) -> TaskState {
        match self.active.lock().as_ref() {
            None => TaskState::Stopped,
            Some(active) if active.handle.is_finished() => TaskState::Stopped,
            Some(active) if Instant::now() < active.resume_at => TaskState::Paused,
            Some(_) => TaskState::Running,
        }
    }

    fn schedule(&self, delay: Duration) {
        let job = Arc::clone(&self.job);
        let period = self.period;

        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                sleep(delay).await;
            }
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                timer.tick().await;
                {
                    let mut run = job.lock();
                    (*run)();
                }
            }
        });

        let mut active = self.active.lock();
        if let Some(previous) = active.take() {
            previous.handle.abort();
        }
        *active = Some(Active {
            handle,
            resume_at: Instant::now() + delay,
        });
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        if let Some(active) = self.active.get_mut().take() {
            active.handle.abort();
        }
    }
}
