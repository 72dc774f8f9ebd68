//! The `lexiquiz stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

use lexiquiz_store::config::load_config_from;
use lexiquiz_store::{personal, progress, UserFiles};

#[derive(Debug, Serialize)]
struct StatsReport {
    user: String,
    words_missed: usize,
    total_incorrect: u64,
    personal_words: usize,
    most_missed: Vec<WordStat>,
}

#[derive(Debug, Serialize)]
struct WordStat {
    word: String,
    incorrect_attempts: u32,
}

pub fn execute(
    user: String,
    data_dir: Option<PathBuf>,
    top: usize,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let data_dir = data_dir.unwrap_or(config.data_dir);
    let files = UserFiles::new(&data_dir, &user)?;

    let record = progress::load_progress(&files.progress)?;
    let personal_words = personal::load_entries(&files.dictionary)?.len();

    let report = StatsReport {
        user: files.user.clone(),
        words_missed: record.len(),
        total_incorrect: record.total(),
        personal_words,
        most_missed: record
            .most_missed(top)
            .into_iter()
            .map(|(word, count)| WordStat {
                word: word.to_string(),
                incorrect_attempts: count,
            })
            .collect(),
    };

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print_text(&report),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}

fn print_text(report: &StatsReport) {
    println!("Progress for {}", report.user);

    if report.most_missed.is_empty() {
        println!("No mistakes recorded yet.");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Word", "Incorrect attempts"]);
        for stat in &report.most_missed {
            table.add_row(vec![
                Cell::new(&stat.word),
                Cell::new(stat.incorrect_attempts),
            ]);
        }
        println!("{table}");
        println!(
            "{} incorrect attempt(s) across {} word(s).",
            report.total_incorrect, report.words_missed
        );
    }

    println!("Personal dictionary: {} word(s).", report.personal_words);
}
