use std::collections::VecDeque;

use crate::sensor::Reading;

/// Maximum number of readings kept per region (three hours at one per minute).
pub const HISTORY_CAPACITY: usize = 180;

/// Bounded, time-ordered readings of one region. Oldest entries are evicted first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    readings: VecDeque<Reading>,
}

impl History {
    pub fn new() -> Self {
        Self {
            readings: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Builds a history from readings in time order, keeping the newest
    /// `HISTORY_CAPACITY` of them.
    pub fn from_readings<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = Reading>,
    {
        let mut history = Self::new();
        for reading in readings {
            history.push(reading);
        }
        history
    }

    /// Appends a reading and returns the evicted one, if any.
    ///
    /// A timestamp older than the current newest entry is raised to it so
    /// the sequence never goes backwards.
    pub fn push(&mut self, mut reading: Reading) -> Option<Reading> {
        if let Some(last) = self.readings.back() {
            reading.timestamp = reading.timestamp.max(last.timestamp);
        }
        self.readings.push_back(reading);
        if self.readings.len() > HISTORY_CAPACITY {
            self.readings.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn first(&self) -> Option<&Reading> {
        self.readings.front()
    }

    pub fn last(&self) -> Option<&Reading> {
        self.readings.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Reading> + ExactSizeIterator + '_ {
        self.readings.iter()
    }

    pub fn to_vec(&self) -> Vec<Reading> {
        self.readings.iter().copied().collect()
    }
}
