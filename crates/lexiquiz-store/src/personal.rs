//! Per-user personal dictionary.
//!
//! A comma-delimited, append-only file with the header `word,translation`.
//! Variants inside a field are joined with `;`, which never occurs inside a
//! variant, so every record has exactly one comma.

use std::io::Write;
use std::path::{Path, PathBuf};

use lexiquiz_core::model::TranslationEntry;
use lexiquiz_core::parser::split_variants;
use lexiquiz_core::traits::WordCollector;

use crate::error::StoreError;
use crate::layout::UserFiles;

/// First line of every personal dictionary file.
pub const DICTIONARY_HEADER: &str = "word,translation";

const DELIMITER: char = ',';
const VARIANT_JOINER: char = ';';

/// Write an empty dictionary with its header unless the file exists.
///
/// Returns `true` if the file was created.
pub fn create_if_absent(path: &Path) -> Result<bool, StoreError> {
    if path.exists() {
        return Ok(false);
    }
    std::fs::write(path, format!("{DICTIONARY_HEADER}\n")).map_err(|e| StoreError::io(path, e))?;
    tracing::debug!("created personal dictionary {}", path.display());
    Ok(true)
}

/// Turn user text into a single field: commas and semicolons separate
/// variants, which are trimmed and joined with `;`.
pub fn join_variants(field: &str) -> String {
    let variants: Vec<String> = field
        .split(DELIMITER)
        .flat_map(|part| split_variants(part, VARIANT_JOINER))
        .collect();
    variants.join(";")
}

/// Append one record, writing the header first if the file is missing.
pub fn append_record(path: &Path, word: &str, translation: &str) -> Result<(), StoreError> {
    let word = join_variants(word);
    let translation = join_variants(translation);
    if word.is_empty() || translation.is_empty() {
        return Err(StoreError::InvalidRecord(
            "both word and translation must be non-empty".into(),
        ));
    }
    if word.contains('\n') || translation.contains('\n') {
        return Err(StoreError::InvalidRecord("fields cannot span lines".into()));
    }

    create_if_absent(path)?;
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| StoreError::io(path, e))?;
    writeln!(file, "{word}{DELIMITER}{translation}").map_err(|e| StoreError::io(path, e))
}

/// Read the dictionary back as quiz entries.
///
/// A missing file yields no entries. Lines that don't hold exactly two
/// fields are skipped with a warning.
pub fn load_entries(path: &Path) -> Result<Vec<TranslationEntry>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut entries = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || (idx == 0 && trimmed.eq_ignore_ascii_case(DICTIONARY_HEADER)) {
            continue;
        }

        let fields: Vec<&str> = line.split(DELIMITER).collect();
        let entry = match fields.as_slice() {
            [word, translation] => TranslationEntry::new(
                split_variants(word, VARIANT_JOINER),
                split_variants(translation, VARIANT_JOINER),
            ),
            _ => None,
        };
        match entry {
            Some(entry) => entries.push(entry),
            None => tracing::warn!(
                "{}: skipping malformed line {}",
                path.display(),
                idx + 1
            ),
        }
    }
    Ok(entries)
}

/// A user's personal dictionary file.
#[derive(Debug, Clone)]
pub struct PersonalDictionary {
    path: PathBuf,
}

impl PersonalDictionary {
    /// Open the user's dictionary, creating it with a header if absent.
    pub fn open(files: &UserFiles) -> Result<Self, StoreError> {
        files.ensure_dir()?;
        Self::open_path(&files.dictionary)
    }

    /// Like [`PersonalDictionary::open`] for an explicit path.
    pub fn open_path(path: &Path) -> Result<Self, StoreError> {
        create_if_absent(path)?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, word: &str, translation: &str) -> Result<(), StoreError> {
        append_record(&self.path, word, translation)
    }

    pub fn load_entries(&self) -> Result<Vec<TranslationEntry>, StoreError> {
        load_entries(&self.path)
    }
}

impl WordCollector for PersonalDictionary {
    fn append(&mut self, word: &str, translation: &str) -> anyhow::Result<()> {
        Ok(PersonalDictionary::append(self, word, translation)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_if_absent_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice_dictionary.csv");

        assert!(create_if_absent(&path).unwrap());
        append_record(&path, "cat", "chat").unwrap();
        assert!(!create_if_absent(&path).unwrap());

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "word,translation\ncat,chat\n"
        );
    }

    #[test]
    fn duplicates_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let dict = PersonalDictionary::open_path(&dir.path().join("d.csv")).unwrap();
        dict.append("cat", "chat").unwrap();
        dict.append("cat", "chat").unwrap();

        let content = std::fs::read_to_string(dict.path()).unwrap();
        assert_eq!(content.matches("cat,chat").count(), 2);
    }

    #[test]
    fn variants_are_joined_with_semicolon() {
        assert_eq!(join_variants("cat, feline"), "cat;feline");
        assert_eq!(join_variants(" chat ;félin,"), "chat;félin");
        assert_eq!(join_variants("a/b"), "a/b");
        assert_eq!(join_variants(" , "), "");
    }

    #[test]
    fn slash_inside_a_variant_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.csv");
        append_record(&path, "he/she, they", "il/elle").unwrap();

        let entries = load_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].phrases, vec!["he/she", "they"]);
        assert_eq!(entries[0].translations, vec!["il/elle"]);
    }

    #[test]
    fn load_entries_ignores_bom_before_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.csv");
        std::fs::write(&path, "\u{feff}word,translation\ndog,chien\n").unwrap();

        let entries = load_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].phrases, vec!["dog"]);
    }

    #[test]
    fn empty_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.csv");
        assert!(matches!(
            append_record(&path, "cat", " , "),
            Err(StoreError::InvalidRecord(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn append_recreates_missing_file_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.csv");
        append_record(&path, "dog", "chien").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "word,translation\ndog,chien\n"
        );
    }

    #[test]
    fn load_entries_round_trips_variants() {
        let dir = tempfile::tempdir().unwrap();
        let mut dict = PersonalDictionary::open_path(&dir.path().join("d.csv")).unwrap();
        let collector: &mut dyn WordCollector = &mut dict;
        collector.append("cat, feline", "chat, félin").unwrap();
        collector.append("dog", "chien").unwrap();

        let entries = dict.load_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].phrases, vec!["cat", "feline"]);
        assert_eq!(entries[0].translations, vec!["chat", "félin"]);
    }

    #[test]
    fn load_entries_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.csv");
        std::fs::write(&path, "word,translation\ncat,chat\nbroken\na,b,c\n,x\ndog,chien\n").unwrap();
        let entries = load_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].translations, vec!["chien"]);
    }

    #[test]
    fn missing_dictionary_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_entries(&dir.path().join("none.csv")).unwrap().is_empty());
    }
}
