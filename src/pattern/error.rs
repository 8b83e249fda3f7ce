use thiserror::Error;

/// Errors produced while compiling a rename pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A `{` opened a directive that no `}` closes
    #[error("Invalid pattern: brace opened at offset {offset} is never closed")]
    Unclosed { offset: usize },
}

impl PatternError {
    /// Byte offset of the offending `{` in the raw pattern
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Unclosed { offset } => *offset,
        }
    }
}
