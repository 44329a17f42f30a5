use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::store::Store;

// Current store snapshot, shared between the tick job and readers
#[derive(Clone)]
pub struct StoreHandle {
    current: Arc<RwLock<Arc<Store>>>,
    version: Arc<AtomicU64>,
}

impl StoreHandle {
    pub fn new(store: Store) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(store))),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The snapshot published last. It never changes once handed out.
    pub fn snapshot(&self) -> Arc<Store> {
        self.current.read().clone()
    }

    /// Publishes a new snapshot and returns its version number.
    pub fn replace(&self, store: Store) -> u64 {
        let next = Arc::new(store);
        *self.current.write() = next;
        self.version.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Number of snapshots published since construction.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }
}
