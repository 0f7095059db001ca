//! Traversal errors

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A directory that could not be listed during a walk.
///
/// These never abort a walk. They are handed to the walker's reporter and the
/// affected subtree is skipped.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read entry in directory {}: {source}", path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    /// The directory whose listing failed
    pub fn path(&self) -> &Path {
        match self {
            WalkError::ReadDir { path, .. } | WalkError::ReadEntry { path, .. } => path,
        }
    }

    /// Stable machine-readable code for result output
    pub fn code(&self) -> &'static str {
        match self {
            WalkError::ReadDir { .. } => "READ_DIR_FAILED",
            WalkError::ReadEntry { .. } => "READ_ENTRY_FAILED",
        }
    }
}
