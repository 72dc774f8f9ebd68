//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lexiquiz_core::engine::DEFAULT_MAX_ATTEMPTS;
use lexiquiz_core::model::Direction;

/// Top-level lexiquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiquizConfig {
    /// Translation source file.
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,
    /// Directory holding per-user progress and dictionary files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Wrong answers allowed per word.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Direction to use without asking.
    #[serde(default)]
    pub default_direction: Option<Direction>,
}

fn default_dictionary() -> PathBuf {
    PathBuf::from("data/dictionary.csv")
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("data/users")
}
fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for LexiquizConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            data_dir: default_data_dir(),
            max_attempts: default_max_attempts(),
            default_direction: None,
        }
    }
}

impl LexiquizConfig {
    /// Check values that serde can't.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.max_attempts >= 1, "max_attempts must be at least 1");
        Ok(())
    }

    /// Apply `LEXIQUIZ_DICTIONARY` and `LEXIQUIZ_DATA_DIR` overrides, looking
    /// variables up through `lookup`.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("LEXIQUIZ_DICTIONARY").filter(|p| !p.is_empty()) {
            self.dictionary = PathBuf::from(path);
        }
        if let Some(path) = lookup("LEXIQUIZ_DATA_DIR").filter(|p| !p.is_empty()) {
            self.data_dir = PathBuf::from(path);
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when `path` is `None`:
/// 1. `lexiquiz.toml` in the current directory
/// 2. `~/.config/lexiquiz/config.toml`
///
/// Environment variable overrides: `LEXIQUIZ_DICTIONARY`, `LEXIQUIZ_DATA_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<LexiquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("lexiquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<LexiquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => LexiquizConfig::default(),
    };

    config.apply_env_overrides(|key| std::env::var(key).ok());
    config.validate()?;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("lexiquiz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LexiquizConfig::default();
        assert_eq!(config.dictionary, PathBuf::from("data/dictionary.csv"));
        assert_eq!(config.data_dir, PathBuf::from("data/users"));
        assert_eq!(config.max_attempts, 3);
        assert!(config.default_direction.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let config: LexiquizConfig = toml::from_str(
            r#"
dictionary = "words/french.csv"
default_direction = "target_to_source"
"#,
        )
        .unwrap();
        assert_eq!(config.dictionary, PathBuf::from("words/french.csv"));
        assert_eq!(config.data_dir, PathBuf::from("data/users"));
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.default_direction, Some(Direction::TargetToSource));
    }

    #[test]
    fn zero_attempts_is_invalid() {
        let config = LexiquizConfig {
            max_attempts: 0,
            ..LexiquizConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexiquiz.toml");
        std::fs::write(&path, "max_attempts = 5\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.max_attempts, 5);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "max_attempts = \"many\"").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }

    #[test]
    fn env_overrides_replace_paths() {
        let mut config = LexiquizConfig::default();
        config.apply_env_overrides(|key| match key {
            "LEXIQUIZ_DATA_DIR" => Some("/tmp/quiz".to_string()),
            "LEXIQUIZ_DICTIONARY" => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.data_dir, PathBuf::from("/tmp/quiz"));
        assert_eq!(config.dictionary, PathBuf::from("data/dictionary.csv"));
    }
}
