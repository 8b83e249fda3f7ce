//! Operator command words

use std::fmt;
use std::str::FromStr;

/// Prompt shown when asking for the next command
pub const ACTION_PROMPT: &str =
    "Choose an action <pattern(p)/insert(i)/exclude(e)/reorder(r)/swap(s)/confirm(c)/abort(a)>";

/// A top-level operator command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Replace the pattern
    Pattern,
    /// Add a path to the plan
    Insert,
    /// Remove an entry from the plan
    Exclude,
    /// Reorder the plan
    Reorder,
    /// Exchange two entries
    Swap,
    /// Apply the plan
    Confirm,
    /// Quit without renaming
    Abort,
}

impl Command {
    pub const ALL: [Self; 7] = [
        Self::Pattern,
        Self::Insert,
        Self::Exclude,
        Self::Reorder,
        Self::Swap,
        Self::Confirm,
        Self::Abort,
    ];

    /// Long form of the command word
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::Insert => "insert",
            Self::Exclude => "exclude",
            Self::Reorder => "reorder",
            Self::Swap => "swap",
            Self::Confirm => "confirm",
            Self::Abort => "abort",
        }
    }

    /// Single-letter abbreviation
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Self::Pattern => 'p',
            Self::Insert => 'i',
            Self::Exclude => 'e',
            Self::Reorder => 'r',
            Self::Swap => 's',
            Self::Confirm => 'c',
            Self::Abort => 'a',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Word that names no command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Match either the full word or its letter, exactly as typed
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        Self::ALL
            .into_iter()
            .find(|command| {
                word == command.name() || word.chars().eq(std::iter::once(command.short()))
            })
            .ok_or_else(|| UnknownCommand(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_forms() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>(), Ok(command));
            assert_eq!(command.short().to_string().parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" swap\n".parse::<Command>(), Ok(Command::Swap));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("P".parse::<Command>().is_err());
        assert!("Confirm".parse::<Command>().is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = "rename".parse::<Command>().unwrap_err();
        assert_eq!(err, UnknownCommand("rename".into()));
        assert_eq!(err.to_string(), "Unknown command: rename");
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_prompt_lists_every_command() {
        for command in Command::ALL {
            assert!(ACTION_PROMPT.contains(&format!("{}({})", command.name(), command.short())));
        }
    }
}
