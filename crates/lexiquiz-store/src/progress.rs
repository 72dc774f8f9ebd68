//! Per-user incorrect-attempt counts.
//!
//! The file is `;`-delimited with the header `word;incorrect_attempts` and
//! one record per word. It is rewritten in full after every change. If the
//! same word appears on more than one line, the counts are summed.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use lexiquiz_core::model::ProgressRecord;
use lexiquiz_core::traits::ProgressTracker;

use crate::error::StoreError;
use crate::layout::UserFiles;

/// First line of every progress file.
pub const PROGRESS_HEADER: &str = "word;incorrect_attempts";

const DELIMITER: char = ';';

/// Load a progress file. A missing file yields an empty record.
pub fn load_progress(path: &Path) -> Result<ProgressRecord, StoreError> {
    if !path.exists() {
        return Ok(ProgressRecord::new());
    }
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    parse_progress_str(&content, path)
}

/// Parse progress records from a string.
pub fn parse_progress_str(content: &str, source_path: &Path) -> Result<ProgressRecord, StoreError> {
    let mut record = ProgressRecord::new();
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || (line_no == 1 && trimmed.eq_ignore_ascii_case(PROGRESS_HEADER)) {
            continue;
        }

        let format_err = |reason: String| StoreError::Format {
            path: source_path.to_path_buf(),
            line: line_no,
            reason,
        };

        let Some((word, count)) = line.split_once(DELIMITER) else {
            return Err(format_err(format!("missing '{DELIMITER}' delimiter")));
        };
        if count.contains(DELIMITER) {
            return Err(format_err("too many fields".into()));
        }

        let word = word.trim();
        if word.is_empty() {
            return Err(format_err("word is empty".into()));
        }
        let count: u32 = count
            .trim()
            .parse()
            .map_err(|_| format_err(format!("invalid count '{}'", count.trim())))?;

        if record.count(word) > 0 {
            tracing::warn!(
                "{}: duplicate entry for '{word}' at line {line_no}, merging counts",
                source_path.display()
            );
        }
        record.merge(word, count);
    }

    Ok(record)
}

/// Render a record in file format, header first.
pub fn render_progress(record: &ProgressRecord) -> Result<String, StoreError> {
    let mut out = String::new();
    out.push_str(PROGRESS_HEADER);
    out.push('\n');
    for (word, count) in record.iter() {
        if word.contains(DELIMITER) || word.contains('\n') {
            return Err(StoreError::InvalidRecord(format!(
                "word '{word}' cannot be stored in a progress file"
            )));
        }
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{word}{DELIMITER}{count}");
    }
    Ok(out)
}

/// Overwrite `path` with the full record.
pub fn write_progress(path: &Path, record: &ProgressRecord) -> Result<(), StoreError> {
    let content = render_progress(record)?;
    std::fs::write(path, content).map_err(|e| StoreError::io(path, e))
}

/// A user's progress, held in memory and flushed on every change.
#[derive(Debug)]
pub struct ProgressStore {
    path: PathBuf,
    record: ProgressRecord,
}

impl ProgressStore {
    /// Load the user's progress, creating the file with a header if absent.
    pub fn open(files: &UserFiles) -> Result<Self, StoreError> {
        files.ensure_dir()?;
        Self::open_path(&files.progress)
    }

    /// Like [`ProgressStore::open`] for an explicit path.
    pub fn open_path(path: &Path) -> Result<Self, StoreError> {
        let record = load_progress(path)?;
        if !path.exists() {
            write_progress(path, &record)?;
            tracing::debug!("created progress file {}", path.display());
        }
        Ok(Self {
            path: path.to_path_buf(),
            record,
        })
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Increment the count for `word` and rewrite the whole file.
    pub fn record_incorrect(&mut self, word: &str) -> Result<u32, StoreError> {
        let count = self.record.increment(word);
        write_progress(&self.path, &self.record)?;
        Ok(count)
    }
}

impl ProgressTracker for ProgressStore {
    fn record_incorrect(&mut self, word: &str) -> anyhow::Result<u32> {
        Ok(ProgressStore::record_incorrect(self, word)?)
    }
}
