//! lexiquiz-store — Flat-file persistence for per-user quiz state.
//!
//! Implements the `ProgressTracker` and `WordCollector` traits from
//! `lexiquiz-core` on top of small delimited text files, one pair of files
//! per user, and loads the TOML configuration that says where they live.

pub mod config;
pub mod error;
pub mod layout;
pub mod personal;
pub mod progress;

pub use config::{load_config_from, LexiquizConfig};
pub use error::StoreError;
pub use layout::UserFiles;
pub use personal::PersonalDictionary;
pub use progress::ProgressStore;
