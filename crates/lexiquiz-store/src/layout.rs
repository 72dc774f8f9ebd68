//! Where a user's files live.

use std::path::{Path, PathBuf};

use lexiquiz_core::session::validate_username;

use crate::error::StoreError;

/// Paths of the files belonging to one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFiles {
    /// The validated username.
    pub user: String,
    /// `<data_dir>/<user>_progress.csv`
    pub progress: PathBuf,
    /// `<data_dir>/<user>_dictionary.csv`
    pub dictionary: PathBuf,
}

impl UserFiles {
    /// Resolve the file paths for `user` under `data_dir`.
    pub fn new(data_dir: &Path, user: &str) -> Result<Self, StoreError> {
        let user = validate_username(user).map_err(StoreError::InvalidUser)?;
        Ok(Self {
            progress: data_dir.join(format!("{user}_progress.csv")),
            dictionary: data_dir.join(format!("{user}_dictionary.csv")),
            user,
        })
    }

    /// Create the directory holding the files if it doesn't exist yet.
    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        for path in [&self.progress, &self.dictionary] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }
        Ok(())
    }
}
