use std::path::PathBuf;

use thiserror::Error;

use crate::index::IndexError;

/// Errors raised by the rename session
#[derive(Debug, Error)]
pub enum SessionError {
    /// An action addressed a position outside the plan
    #[error(transparent)]
    Index(#[from] IndexError),

    /// A filesystem rename failed while committing
    #[error("Failed to rename '{}' to '{}' after {renamed} successful rename(s): {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        renamed: usize,
        #[source]
        source: std::io::Error,
    },

    /// The session already committed or aborted
    #[error("Session already finished")]
    Finished,
}

impl SessionError {
    /// Whether the interaction loop can carry on after this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}
