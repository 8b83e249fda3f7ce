//! Output abstraction layer
//!
//! This module provides a backend-agnostic interface for operator-facing
//! output, with a colored stdout implementation and an in-memory one for
//! tests and embedding.

use std::cell::RefCell;

use colored::Colorize;

use super::plan::PlanLine;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use renamr::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("Normal message");
/// output.success("Operation completed!");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Write a rendered rename plan
    fn plan(&self, lines: &[PlanLine]) {
        for line in lines {
            self.write(&line.to_string());
        }
    }
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only warnings and errors are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "Warning:".yellow(), message);
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }

    fn plan(&self, lines: &[PlanLine]) {
        if self.quiet {
            return;
        }
        for line in lines {
            match line {
                PlanLine::Pattern(raw) => {
                    println!("Current pattern: [{}]", raw.white().on_green());
                }
                PlanLine::Folder(_) => println!("{}", line.to_string().bold()),
                PlanLine::Entry {
                    index,
                    old_name,
                    new_name,
                } => println!("  ({index})  {old_name} -> {}", new_name.cyan()),
                PlanLine::Separator | PlanLine::Empty => println!("{line}"),
            }
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// Writer that keeps every message in memory
#[derive(Debug, Default)]
pub struct MemoryWriter {
    messages: RefCell<Vec<(MessageLevel, String)>>,
}

impl MemoryWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in the order written
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.borrow().clone()
    }

    /// Messages written at `level`
    #[must_use]
    pub fn at_level(&self, level: MessageLevel) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Drop everything written so far
    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }

    fn add_message(&self, level: MessageLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl OutputWriter for MemoryWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }
}

impl<T: OutputWriter + ?Sized> OutputWriter for &T {
    fn write(&self, message: &str) {
        (**self).write(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn success(&self, message: &str) {
        (**self).success(message);
    }

    fn warning(&self, message: &str) {
        (**self).warning(message);
    }

    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn plan(&self, lines: &[PlanLine]) {
        (**self).plan(lines);
    }
}
