//! Interactive session setup: welcome text, username and direction prompts.
//!
//! Invalid input is handled here by asking again; `None` means the user quit
//! or input ended.

use std::io;

use crate::matching::Command;
use crate::model::Direction;
use crate::traits::Console;

/// Text printed before the first prompt.
pub const INSTRUCTIONS: &str = "\
Welcome to lexiquiz!
--------------------
You will be shown words and phrases one at a time. Type the translation and
press Enter. Answers are not case sensitive.

While answering you can type:
  q         quit the game
  s         save the current word to your personal dictionary
  add word  add a new word to your personal dictionary

Good luck!";

const DIRECTION_MENU: [(Direction, &str); 2] = [
    (Direction::SourceToTarget, "source language to target language"),
    (Direction::TargetToSource, "target language to source language"),
];

/// Longest username accepted, in characters.
pub const MAX_USERNAME_LEN: usize = 64;

/// Check a username, returning it trimmed.
///
/// Usernames become part of file names, so only letters, digits, `_` and
/// `-` are allowed.
pub fn validate_username(input: &str) -> Result<String, String> {
    let name = input.trim();
    if name.is_empty() {
        return Err("username cannot be empty".into());
    }
    if name.chars().count() > MAX_USERNAME_LEN {
        return Err(format!(
            "username cannot be longer than {MAX_USERNAME_LEN} characters"
        ));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(format!("username cannot contain '{bad}'"));
    }
    Ok(name.to_string())
}

/// Ask for a username until a valid one is entered.
pub fn prompt_username(console: &mut dyn Console) -> io::Result<Option<String>> {
    loop {
        let Some(input) = console.read_line("Enter your username:")? else {
            return Ok(None);
        };
        if Command::parse(&input) == Some(Command::Quit) {
            return Ok(None);
        }
        match validate_username(&input) {
            Ok(name) => return Ok(Some(name)),
            Err(reason) => console.say(&format!("Invalid username: {reason}."))?,
        }
    }
}

/// Ask for the translation direction until `1` or `2` is entered.
pub fn prompt_direction(console: &mut dyn Console) -> io::Result<Option<Direction>> {
    console.say("Choose the translation direction:")?;
    for (direction, label) in DIRECTION_MENU {
        console.say(&format!("  {}) {label}", direction.menu_choice()))?;
    }
    loop {
        let Some(input) = console.read_line("Enter 1 or 2:")? else {
            return Ok(None);
        };
        let choice = input.trim();
        if let Some((direction, _)) = DIRECTION_MENU
            .iter()
            .find(|(direction, _)| direction.menu_choice() == choice)
        {
            return Ok(Some(*direction));
        }
        if Command::parse(choice) == Some(Command::Quit) {
            return Ok(None);
        }
        console.say(&format!("Invalid choice '{choice}', please enter 1 or 2."))?;
    }
}
