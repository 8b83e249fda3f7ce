//! Renamr - batch file renaming driven by a naming pattern
//!
//! This library compiles naming patterns such as `{i}_{o}` into a reusable
//! generator and runs an interactive session in which an operator edits a
//! rename plan (pattern, order, membership) before committing it to disk.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod fs;
pub mod index;
pub mod pattern;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RenamrError {
    /// Pattern compile error
    #[error("{0}")]
    Pattern(#[from] pattern::PatternError),
    /// Item index error
    #[error("{0}")]
    Index(#[from] index::IndexError),
    /// Session error
    #[error("Session error: {0}")]
    Session(#[from] session::SessionError),
    /// Prompt error
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
