//! Command-line interface definitions and parsing
//!
//! This module defines the CLI for renamr using the `clap` crate.
//!
//! # Modes
//!
//! - **interactive** (default): the plan is shown and commands are read from
//!   the terminal until `confirm` or `abort`
//! - **scripted** (`-c`): every argument after `-c` is one answer; when they
//!   run out the plan is confirmed
//!
//! # Examples
//!
//! ```no_run
//! use renamr::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! for path in cli.expand_files() {
//!     println!("{}", path.display());
//! }
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::pattern::Pattern;

const PATTERN_HELP: &str = "\
Batch rename files with a customizable pattern.

Pattern is a customizable string which may contain format operators
surrounded with braces ('{}'). Write '{{' for a literal brace.
Available operators are:
  o
    Writes the old file name.

  p
    Writes the old file name without its extension.

  e
    Writes the old file name's extension.

  i
    Writes the file index.

  c<character>...
    Writes the nth character in the character sequence, where n is the
    remainder of the file index divided by the length of the sequence.

Interactive commands: pattern(p), insert(i), exclude(e), reorder(r),
swap(s), confirm(c), abort(a).";

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "renamr")]
#[command(about = "Batch rename files with a customizable pattern", long_about = PATTERN_HELP)]
#[command(version)]
pub struct Cli {
    /// Files to rename (glob patterns are expanded)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Initial pattern (overrides config)
    #[arg(short = 'p', long = "pattern", value_name = "PATTERN")]
    pub pattern: Option<Pattern>,

    /// Play the following commands instead of prompting; a confirm is implied at the end
    #[arg(
        short = 'c',
        long = "commands",
        value_name = "COMMAND",
        num_args = 0..,
        allow_hyphen_values = true
    )]
    pub commands: Option<Vec<String>>,

    /// Suppress the plan and informational output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Rename through temporary names first (overrides config)
    #[arg(long = "staged")]
    pub staged: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether commands come from `-c` instead of the terminal
    #[must_use]
    pub const fn is_scripted(&self) -> bool {
        self.commands.is_some()
    }

    /// File arguments with glob patterns expanded
    ///
    /// An argument is expanded only when it does not exist as written and
    /// contains a glob metacharacter. Patterns matching nothing are kept
    /// as-is.
    #[must_use]
    pub fn expand_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::with_capacity(self.files.len());
        for file in &self.files {
            match glob_matches(file) {
                Some(matches) if !matches.is_empty() => files.extend(matches),
                _ => files.push(file.clone()),
            }
        }
        files
    }
}

fn glob_matches(file: &std::path::Path) -> Option<Vec<PathBuf>> {
    if file.exists() {
        return None;
    }
    let raw = file.to_str()?;
    if !raw.contains(['*', '?', '[']) {
        return None;
    }
    match glob::glob(raw) {
        Ok(entries) => Some(entries.filter_map(Result::ok).collect()),
        Err(err) => {
            tracing::debug!(pattern = raw, %err, "not a valid glob, using it literally");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDir;

    #[test]
    fn test_parse_files_and_pattern() {
        let cli = Cli::try_parse_from(["renamr", "a.txt", "b.txt", "-p", "{i}_{o}"]).unwrap();
        assert_eq!(cli.files, [PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(cli.pattern.as_ref().unwrap().raw(), "{i}_{o}");
        assert!(!cli.is_scripted());
        assert!(!cli.quiet);
        assert!(!cli.staged);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(Cli::try_parse_from(["renamr", "-p", "{i"]).is_err());
    }

    #[test]
    fn test_commands_take_the_rest() {
        let cli =
            Cli::try_parse_from(["renamr", "a", "-c", "p", "{i}", "s", "1", "2"]).unwrap();
        assert_eq!(cli.files, [PathBuf::from("a")]);
        assert_eq!(
            cli.commands.unwrap(),
            ["p", "{i}", "s", "1", "2"].map(String::from)
        );
    }

    #[test]
    fn test_empty_commands_still_scripted() {
        let cli = Cli::try_parse_from(["renamr", "a", "-c"]).unwrap();
        assert!(cli.is_scripted());
        assert_eq!(cli.commands.unwrap().len(), 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["renamr", "-q", "--staged", "-vv"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.staged);
        assert_eq!(cli.verbose, 2);
        assert!(cli.files.is_empty());
    }

    #[test]
    fn test_expand_files_globs() {
        let dir = TestDir::new();
        dir.create("one.jpg", "");
        dir.create("two.jpg", "");
        dir.create("three.png", "");
        let literal = dir.create("odd[1].txt", "");
        let glob = dir.path("*.jpg");
        let missing = dir.path("*.gif");

        let cli = Cli {
            files: vec![glob, literal.clone(), missing.clone()],
            pattern: None,
            commands: None,
            quiet: false,
            staged: false,
            verbose: 0,
        };

        assert_eq!(
            cli.expand_files(),
            [dir.path("one.jpg"), dir.path("two.jpg"), literal, missing]
        );
    }
}
