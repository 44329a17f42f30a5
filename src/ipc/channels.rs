use crossbeam::channel::{bounded, Receiver, Sender, TrySendError};
use std::sync::Arc;

use crate::store::Store;

/// Sent to observers after every published tick.
#[derive(Clone, Debug)]
pub struct TickNotice {
    pub version: u64,
    pub store: Arc<Store>,
}

#[derive(Clone)]
pub struct TelemetryChannels {
    // Scheduler -> observers
    pub notice_tx: Sender<TickNotice>,
    pub notice_rx: Arc<Receiver<TickNotice>>,
}

impl TelemetryChannels {
    pub fn new(buffer_size: usize) -> Self {
        let (notice_tx, notice_rx) = bounded(buffer_size.max(1));

        Self {
            notice_tx,
            notice_rx: Arc::new(notice_rx),
        }
    }

    /// Never blocks the publisher; returns false when the notice was dropped.
    pub fn publish(&self, notice: TickNotice) -> bool {
        match self.notice_tx.try_send(notice) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => false,
        }
    }
}
