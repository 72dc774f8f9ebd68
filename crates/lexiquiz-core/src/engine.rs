//! The quiz engine.
//!
//! Walks a shuffled copy of the dictionary once, asks each entry until it is
//! answered correctly or its attempts run out, and reports wrong answers and
//! saved words through the store traits.

use std::ops::ControlFlow;

use anyhow::Result;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::matching::{is_match, Command};
use crate::model::{Direction, Question, TranslationEntry};
use crate::report::{EntryOutcome, SessionSummary};
use crate::traits::{Console, ProgressTracker, WordCollector};

/// Attempts per entry when nothing else is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Configuration for the quiz engine.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Wrong answers allowed per entry before the answers are revealed.
    pub max_attempts: u32,
    /// Present at most this many entries.
    pub limit: Option<usize>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            limit: None,
        }
    }
}

/// Draw a prompt from `entry` for the given direction.
///
/// The prompt is a random variant of the prompting group and the accepted
/// answers are the whole opposite group. Returns `None` only for an entry
/// with an empty group.
pub fn get_prompt_answer<R: Rng + ?Sized>(
    entry: &TranslationEntry,
    direction: Direction,
    rng: &mut R,
) -> Option<Question> {
    let prompt = entry.prompts(direction).choose(rng)?.clone();
    let accepted = entry.answers(direction).to_vec();
    if accepted.is_empty() {
        return None;
    }
    Some(Question { prompt, accepted })
}

/// The central quiz engine. Owns a private shuffled copy of the entries.
pub struct QuizEngine<R> {
    entries: Vec<TranslationEntry>,
    direction: Direction,
    config: QuizConfig,
    rng: R,
}

impl<R: Rng> QuizEngine<R> {
    /// Shuffle `entries` and apply the configured limit.
    pub fn new(
        mut entries: Vec<TranslationEntry>,
        direction: Direction,
        config: QuizConfig,
        mut rng: R,
    ) -> Self {
        entries.shuffle(&mut rng);
        if let Some(limit) = config.limit {
            entries.truncate(limit);
        }
        Self {
            entries,
            direction,
            config,
            rng,
        }
    }

    /// Entries in the order they will be asked.
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Run the session until every entry was asked or the user quits.
    pub fn run(
        &mut self,
        console: &mut dyn Console,
        progress: &mut dyn ProgressTracker,
        words: &mut dyn WordCollector,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::new(self.entries.len());
        let mut turn = Turn {
            direction: self.direction,
            max_attempts: self.config.max_attempts.max(1),
            console,
            progress,
            words,
        };

        for entry in &self.entries {
            let Some(question) = get_prompt_answer(entry, self.direction, &mut self.rng) else {
                tracing::warn!("skipping entry with an empty group: {entry:?}");
                continue;
            };

            let outcome = turn.ask(&question, &mut summary)?;
            summary.record(outcome);
            if outcome == EntryOutcome::Quit {
                turn.console.say("Exiting the game!")?;
                break;
            }
        }

        tracing::info!(
            correct = summary.correct,
            missed = summary.missed,
            quit = summary.quit_early,
            "session finished"
        );
        Ok(summary)
    }
}

/// Per-entry state machine: prompted, then correct, retry, or exhausted.
struct Turn<'a> {
    direction: Direction,
    max_attempts: u32,
    console: &'a mut dyn Console,
    progress: &'a mut dyn ProgressTracker,
    words: &'a mut dyn WordCollector,
}

impl Turn<'_> {
    fn ask(&mut self, question: &Question, summary: &mut SessionSummary) -> Result<EntryOutcome> {
        let prompt_line = format!("Translate: {}", question.prompt);
        let mut attempts = self.max_attempts;

        loop {
            let Some(input) = self.console.read_line(&prompt_line)? else {
                return Ok(EntryOutcome::Quit);
            };

            match Command::parse(&input) {
                Some(Command::Quit) => return Ok(EntryOutcome::Quit),
                Some(Command::Save) => {
                    self.save(question, summary)?;
                    continue;
                }
                Some(Command::AddWord) => {
                    if self.add_word(summary)?.is_break() {
                        return Ok(EntryOutcome::Quit);
                    }
                    continue;
                }
                None => {}
            }

            if is_match(&input, &question.accepted) {
                self.console.say("Correct!")?;
                return Ok(EntryOutcome::Correct);
            }

            attempts -= 1;
            summary.incorrect_answers += 1;
            match self.progress.record_incorrect(&question.prompt) {
                Ok(count) => tracing::debug!("'{}' missed {count} time(s)", question.prompt),
                Err(e) => tracing::warn!("failed to record progress for '{}': {e:#}", question.prompt),
            }

            if attempts > 0 {
                self.console
                    .say(&format!("Wrong! You have {attempts} attempt(s) left."))?;
            } else {
                self.console.say(&format!(
                    "Wrong! The correct answer is: {}",
                    question.accepted.join(", ")
                ))?;
                return Ok(EntryOutcome::Exhausted);
            }
        }
    }

    /// Save the current prompt and its answers, source side first.
    fn save(&mut self, question: &Question, summary: &mut SessionSummary) -> Result<()> {
        let answers = question.accepted.join(", ");
        let (word, translation) = match self.direction {
            Direction::SourceToTarget => (question.prompt.as_str(), answers.as_str()),
            Direction::TargetToSource => (answers.as_str(), question.prompt.as_str()),
        };

        match self.words.append(word, translation) {
            Ok(()) => {
                summary.saved_words += 1;
                self.console
                    .say(&format!("Saved '{word}' to your dictionary."))?;
            }
            Err(e) => {
                tracing::warn!("failed to save '{word}': {e:#}");
                self.console.say("Could not save the word.")?;
            }
        }
        Ok(())
    }

    /// Read a new pair from the console and store it.
    ///
    /// Breaks when the user quits or input ends during the sub-prompts.
    fn add_word(&mut self, summary: &mut SessionSummary) -> Result<ControlFlow<()>> {
        let Some(word) = self.read_field("Word to add (separate variants with commas):")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(translation) = self.read_field("Translation:")? else {
            return Ok(ControlFlow::Break(()));
        };

        if word.is_empty() || translation.is_empty() {
            self.console
                .say("Nothing added: both a word and a translation are required.")?;
            return Ok(ControlFlow::Continue(()));
        }

        match self.words.append(&word, &translation) {
            Ok(()) => {
                summary.added_words += 1;
                self.console
                    .say(&format!("Added '{word}' to your dictionary."))?;
            }
            Err(e) => {
                tracing::warn!("failed to add '{word}': {e:#}");
                self.console.say("Could not save the word.")?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Read one trimmed field, `None` on quit or end of input.
    fn read_field(&mut self, prompt: &str) -> Result<Option<String>> {
        let Some(input) = self.console.read_line(prompt)? else {
            return Ok(None);
        };
        if Command::parse(&input) == Some(Command::Quit) {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}
