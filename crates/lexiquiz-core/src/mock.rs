//! In-memory stores for testing.

use crate::model::ProgressRecord;
use crate::traits::{ProgressTracker, WordCollector};

/// A progress tracker that keeps its record in memory.
///
/// Counts how many times the record would have been written so tests can
/// check the rewrite-on-every-mutation contract.
#[derive(Debug, Default)]
pub struct MemoryProgress {
    /// Current counts.
    pub record: ProgressRecord,
    /// Number of times the record was "persisted".
    pub writes: usize,
    /// Fail every call when set.
    pub fail: bool,
}

impl MemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker whose every call returns an error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ProgressTracker for MemoryProgress {
    fn record_incorrect(&mut self, word: &str) -> anyhow::Result<u32> {
        if self.fail {
            anyhow::bail!("progress storage unavailable");
        }
        let count = self.record.increment(word);
        self.writes += 1;
        Ok(count)
    }
}

/// A word collector that appends to a vector.
#[derive(Debug, Default)]
pub struct MemoryWords {
    /// Saved pairs in order.
    pub saved: Vec<(String, String)>,
}

impl MemoryWords {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordCollector for MemoryWords {
    fn append(&mut self, word: &str, translation: &str) -> anyhow::Result<()> {
        self.saved.push((word.to_string(), translation.to_string()));
        Ok(())
    }
}
