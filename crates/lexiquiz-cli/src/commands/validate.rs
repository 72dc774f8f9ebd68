//! The `lexiquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use lexiquiz_core::parser;
use lexiquiz_store::config::load_config_from;

pub fn execute(dictionary: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let path = match dictionary {
        Some(path) => path,
        None => load_config_from(config_path.as_deref())?.dictionary,
    };

    let entries = parser::load_dictionary(&path)?;
    println!("Dictionary: {} ({} entries)", path.display(), entries.len());

    let warnings = parser::validate_entries(&entries);
    for w in &warnings {
        println!("  [entry {}] WARNING: {}", w.entry + 1, w.message);
    }

    if warnings.is_empty() {
        println!("Dictionary valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
