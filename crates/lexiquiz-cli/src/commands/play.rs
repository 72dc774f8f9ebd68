//! The `lexiquiz play` command: one interactive quiz session.

use std::io;

use anyhow::{Context, Result};

use lexiquiz_core::console::LineConsole;
use lexiquiz_core::engine::{QuizConfig, QuizEngine};
use lexiquiz_core::parser;
use lexiquiz_core::session::{prompt_direction, prompt_username, validate_username, INSTRUCTIONS};
use lexiquiz_core::traits::Console;
use lexiquiz_store::config::load_config_from;
use lexiquiz_store::{PersonalDictionary, ProgressStore, UserFiles};

use crate::PlayArgs;

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;

    let dictionary_path = args.dictionary.unwrap_or(config.dictionary);
    let data_dir = args.data_dir.unwrap_or(config.data_dir);
    let max_attempts = args.attempts.unwrap_or(config.max_attempts);
    anyhow::ensure!(max_attempts >= 1, "attempts must be at least 1");

    let mut console = LineConsole::new(io::stdin().lock(), io::stdout());
    console.say(INSTRUCTIONS)?;
    console.say("")?;

    let user = match args.user {
        Some(user) => validate_username(&user).map_err(|e| anyhow::anyhow!("--user: {e}"))?,
        None => match prompt_username(&mut console)? {
            Some(user) => user,
            None => return quit(&mut console),
        },
    };

    let files = UserFiles::new(&data_dir, &user)?;
    let mut progress = ProgressStore::open(&files)
        .with_context(|| format!("failed to open progress for {user}"))?;
    let mut personal = PersonalDictionary::open(&files)
        .with_context(|| format!("failed to open personal dictionary for {user}"))?;
    tracing::debug!(
        "user {user}: {} word(s) with recorded mistakes",
        progress.record().len()
    );

    let direction = match args.direction.or(config.default_direction) {
        Some(direction) => direction,
        None => match prompt_direction(&mut console)? {
            Some(direction) => direction,
            None => return quit(&mut console),
        },
    };

    let mut entries = parser::load_dictionary(&dictionary_path)?;
    if args.include_personal {
        let saved = personal.load_entries()?;
        tracing::debug!("adding {} personal word(s)", saved.len());
        entries.extend(saved);
    }

    let quiz_config = QuizConfig {
        max_attempts,
        limit: args.limit,
    };
    let mut engine = QuizEngine::new(entries, direction, quiz_config, rand::rng());

    console.say(&format!(
        "\nHello {user}! {} word(s) to practice.\n",
        engine.entries().len()
    ))?;

    let summary = engine.run(&mut console, &mut progress, &mut personal)?;

    console.say("")?;
    console.say(&summary.to_string())?;
    console.say("Game over!")?;
    Ok(())
}

fn quit(console: &mut dyn Console) -> Result<()> {
    console.say("Exiting the game!")?;
    Ok(())
}
