//! Session outcome types and the end-of-session summary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a single entry ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// Answered correctly within the allowed attempts.
    Correct,
    /// All attempts were wrong and the answers were revealed.
    Exhausted,
    /// The user quit while this entry was open.
    Quit,
}

/// Totals for one quiz session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Entries available in this session (after any limit).
    pub total_entries: usize,
    /// Entries that were shown at least once.
    pub presented: usize,
    /// Entries answered correctly.
    pub correct: usize,
    /// Entries whose answers had to be revealed.
    pub missed: usize,
    /// Individual wrong answers across all entries.
    pub incorrect_answers: u32,
    /// Pairs saved with the save command.
    pub saved_words: usize,
    /// Pairs entered with the add-word command.
    pub added_words: usize,
    /// Whether the session ended on a quit request.
    pub quit_early: bool,
}

impl SessionSummary {
    pub fn new(total_entries: usize) -> Self {
        Self {
            total_entries,
            ..Self::default()
        }
    }

    /// Fold one entry outcome into the totals.
    pub fn record(&mut self, outcome: EntryOutcome) {
        self.presented += 1;
        match outcome {
            EntryOutcome::Correct => self.correct += 1,
            EntryOutcome::Exhausted => self.missed += 1,
            EntryOutcome::Quit => self.quit_early = true,
        }
    }

    /// Entries finished with either a correct answer or a reveal.
    pub fn completed(&self) -> usize {
        self.correct + self.missed
    }

    /// Share of completed entries answered correctly, in `0.0..=1.0`.
    pub fn accuracy(&self) -> f64 {
        let completed = self.completed();
        if completed == 0 {
            return 0.0;
        }
        self.correct as f64 / completed as f64
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Answered {} of {} words: {} correct, {} missed ({:.0}% accuracy).",
            self.completed(),
            self.total_entries,
            self.correct,
            self.missed,
            self.accuracy() * 100.0
        )?;
        write!(f, "Wrong answers: {}", self.incorrect_answers)?;
        if self.saved_words > 0 || self.added_words > 0 {
            write!(
                f,
                "\nSaved to your dictionary: {} saved, {} added",
                self.saved_words, self.added_words
            )?;
        }
        Ok(())
    }
}
