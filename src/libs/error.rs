//! Domain errors for streakr.
//!
//! Commands and the tracker loop work with `anyhow::Result`; these variants are
//! the typed failures that callers branch on (recover, reject, or halt).

use crate::libs::messages::Message;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreakError {
    /// A persisted document is unreadable or malformed. Recovered by falling
    /// back to defaults.
    #[error("cannot read {}: {reason}", path.display())]
    Configuration { path: PathBuf, reason: String },

    /// User-supplied input rejected at the boundary.
    #[error("{0}")]
    Validation(Message),

    /// The presence probe failed for one process. Treated as not running.
    #[error("probe failed for '{process}': {reason}")]
    Probe { process: String, reason: String },

    /// The tracking loop cannot continue.
    #[error("{0}")]
    Driver(String),
}

impl StreakError {
    pub fn configuration(path: &Path, reason: impl ToString) -> Self {
        StreakError::Configuration {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
