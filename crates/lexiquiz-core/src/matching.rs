//! Answer normalization and matching.

/// Ellipsis markers stripped from the end of answers and accepted values.
const ELLIPSES: [&str; 2] = ["...", "\u{2026}"];

/// Normalize an answer for comparison.
///
/// Lowercases, trims surrounding whitespace, and removes trailing ellipsis
/// markers until none remain. Normalizing twice gives the same result.
pub fn normalize(input: &str) -> String {
    let mut current = input.trim().to_lowercase();
    loop {
        let stripped = ELLIPSES
            .iter()
            .find_map(|marker| current.strip_suffix(marker))
            .map(|s| s.trim_end().to_string());
        match stripped {
            Some(next) => current = next,
            None => return current,
        }
    }
}

/// Returns `true` if `input` matches any accepted answer after normalization.
///
/// An answer that normalizes to nothing never matches, so a blank input
/// cannot satisfy an accepted value like `...`.
pub fn is_match(input: &str, accepted: &[String]) -> bool {
    let input = normalize(input);
    if input.is_empty() {
        return false;
    }
    accepted.iter().any(|a| normalize(a) == input)
}

/// Inputs that are handled before answer matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// End the whole session.
    Quit,
    /// Save the current prompt and its answers to the personal dictionary.
    Save,
    /// Add a new word pair to the personal dictionary.
    AddWord,
}

impl Command {
    /// Recognize a reserved input. Comparison ignores case and surrounding
    /// whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "q" => Some(Command::Quit),
            "s" => Some(Command::Save),
            "add word" => Some(Command::AddWord),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn normalize_basic() {
        assert_eq!(normalize("  PARIS "), "paris");
        assert_eq!(normalize("Paris..."), "paris");
        assert_eq!(normalize("paris\u{2026}"), "paris");
        assert_eq!(normalize("to be ... "), "to be");
        assert_eq!(normalize("wait...... ..."), "wait");
    }

    #[test]
    fn normalize_keeps_inner_ellipsis() {
        assert_eq!(normalize("not... yet"), "not... yet");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["Paris...", " paris ", "PARIS", "a ... ...", "Élan…", "", "..."] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn matching_ignores_case_whitespace_and_ellipsis() {
        let answers = accepted(&["paris"]);
        assert!(is_match("Paris...", &answers));
        assert!(is_match(" paris ", &answers));
        assert!(is_match("PARIS", &answers));
        assert!(!is_match("pari", &answers));
    }

    #[test]
    fn accepted_answers_are_normalized_too() {
        let answers = accepted(&["Avoir faim...", "Félin"]);
        assert!(is_match("avoir faim", &answers));
        assert!(is_match("félin", &answers));
        assert!(!is_match("felin", &answers));
    }

    #[test]
    fn blank_input_never_matches() {
        let answers = accepted(&["...", "\u{2026}", " "]);
        assert!(!is_match("", &answers));
        assert!(!is_match("   ", &answers));
        assert!(!is_match("...", &answers));
    }

    #[test]
    fn reserved_commands() {
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse(" Q "), Some(Command::Quit));
        assert_eq!(Command::parse("s"), Some(Command::Save));
        assert_eq!(Command::parse("Add Word"), Some(Command::AddWord));
        assert_eq!(Command::parse("quit"), None);
        assert_eq!(Command::parse("add  word"), None);
    }
}
