//! Trait definitions for the console and the per-user stores.
//!
//! The quiz engine only talks to the outside world through these traits.
//! `lexiquiz-store` implements the persistence traits with flat files and
//! [`crate::console::LineConsole`] implements [`Console`] over any reader
//! and writer.

use std::io;

// ---------------------------------------------------------------------------
// Console trait
// ---------------------------------------------------------------------------

/// Line-oriented interactive input and output.
pub trait Console {
    /// Show `prompt` and read one line of input.
    ///
    /// Returns `Ok(None)` at end of input. The returned line has its
    /// trailing newline removed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print one line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// Persistence traits
// ---------------------------------------------------------------------------

/// Records incorrect answers for the current user.
pub trait ProgressTracker {
    /// Increment the incorrect-attempt count for `word`, persist the whole
    /// record, and return the new count.
    fn record_incorrect(&mut self, word: &str) -> anyhow::Result<u32>;
}

/// Collects word pairs the user chose to keep.
pub trait WordCollector {
    /// Append one `(word, translation)` pair.
    fn append(&mut self, word: &str, translation: &str) -> anyhow::Result<()>;
}
