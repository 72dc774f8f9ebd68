//! Translation source parser.
//!
//! Loads translation entries from semicolon-delimited files and validates
//! them. The first record of every file is a header and is skipped.

use std::collections::HashMap;
use std::path::Path;

use crate::error::LoadError;
use crate::model::TranslationEntry;

/// Field delimiter between the phrase group and the translation group.
pub const FIELD_DELIMITER: char = ';';

/// Delimiter between variants inside one group.
pub const VARIANT_DELIMITER: char = ',';

/// Load a translation source file.
pub fn load_dictionary(path: &Path) -> Result<Vec<TranslationEntry>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_source_str(&content, path)?;
    tracing::debug!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse translation records from a string (useful for testing).
pub fn parse_source_str(
    content: &str,
    source_path: &Path,
) -> Result<Vec<TranslationEntry>, LoadError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut entries = Vec::new();

    // Line numbers are 1-based; line 1 is the header.
    for (idx, line) in content.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let format_err = |reason: String| LoadError::Format {
            path: source_path.to_path_buf(),
            line: line_no,
            reason,
        };

        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() != 2 {
            return Err(format_err(format!(
                "expected 2 '{FIELD_DELIMITER}'-separated fields, found {}",
                fields.len()
            )));
        }

        let phrases = split_variants(fields[0], VARIANT_DELIMITER);
        if phrases.is_empty() {
            return Err(format_err("phrase group is empty".into()));
        }
        let translations = split_variants(fields[1], VARIANT_DELIMITER);
        if translations.is_empty() {
            return Err(format_err("translation group is empty".into()));
        }

        entries.push(TranslationEntry {
            phrases,
            translations,
        });
    }

    Ok(entries)
}

/// Split a group into trimmed, non-empty variants.
pub fn split_variants(field: &str, delimiter: char) -> Vec<String> {
    field
        .split(delimiter)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// A warning from dictionary validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based index of the entry the warning is about.
    pub entry: usize,
    /// Warning message.
    pub message: String,
}

/// Check loaded entries for issues that don't prevent a quiz from running.
pub fn validate_entries(entries: &[TranslationEntry]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Same source phrase listed in more than one entry
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    for (idx, entry) in entries.iter().enumerate() {
        for phrase in &entry.phrases {
            let key = phrase.to_lowercase();
            match first_seen.get(&key) {
                Some(&first) if first != idx => warnings.push(ValidationWarning {
                    entry: idx,
                    message: format!("phrase '{phrase}' also appears in entry {}", first + 1),
                }),
                Some(_) => {}
                None => {
                    first_seen.insert(key, idx);
                }
            }
        }
    }

    for (idx, entry) in entries.iter().enumerate() {
        if entry.phrases.len() != entry.translations.len() {
            warnings.push(ValidationWarning {
                entry: idx,
                message: format!(
                    "{} phrase(s) but {} translation(s)",
                    entry.phrases.len(),
                    entry.translations.len()
                ),
            });
        }
    }

    warnings
}
