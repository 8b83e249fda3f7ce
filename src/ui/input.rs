//! User input abstraction layer
//!
//! This module provides a backend-agnostic interface for operator prompts,
//! with an interactive implementation (dialoguer) and a scripted one that
//! replays a fixed queue of answers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

/// Trait for user input operations
///
/// This trait abstracts away the specific input mechanism, so the action
/// handler reads the same way from a terminal or from a command script.
///
/// # Examples
///
/// ```
/// use renamr::ui::input::{ScriptedInput, UserInput};
///
/// let input = ScriptedInput::new(["p", "{i}_{o}"]);
/// assert_eq!(input.prompt_text("Action", None, false).unwrap(), Some("p".into()));
/// ```
pub trait UserInput {
    /// Prompt user for text input
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered text
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed or the script ran out
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>>;

    /// Prompt user for confirmation (yes/no)
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;

    /// Prompt user to select from a list
    ///
    /// # Returns
    ///
    /// * `Ok(Some(usize))` - Zero-based index of the selected item
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    Invalid(String),

    /// A scripted source has no answers left
    #[error("No more scripted input")]
    Exhausted,
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        use dialoguer::Input;

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty);

        if let Some(def) = default {
            input = input.with_initial_text(def);
        }

        input
            .interact_text()
            .map(Some)
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        use dialoguer::Select;

        let mut select = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items);

        if let Some(def) = default {
            select = select.default(def);
        }

        select
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}

/// Input replayed from a fixed queue of answers
///
/// Each prompt consumes one answer. Selections accept a one-based number
/// or the item text; confirmations accept `y`/`yes`/`n`/`no`.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: RefCell<VecDeque<String>>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    /// Answers not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next_answer(&self) -> Result<String> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or(InputError::Exhausted)
    }
}

impl UserInput for ScriptedInput {
    fn prompt_text(
        &self,
        _prompt: &str,
        _default: Option<&str>,
        _allow_empty: bool,
    ) -> Result<Option<String>> {
        self.next_answer().map(Some)
    }

    fn prompt_confirm(&self, _prompt: &str, _default: bool) -> Result<Option<bool>> {
        let answer = self.next_answer()?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(Some(true)),
            "n" | "no" => Ok(Some(false)),
            _ => Err(InputError::Invalid(answer)),
        }
    }

    fn prompt_select(
        &self,
        _prompt: &str,
        items: &[String],
        _default: Option<usize>,
    ) -> Result<Option<usize>> {
        let answer = self.next_answer()?;
        let trimmed = answer.trim();
        if let Ok(choice) = trimmed.parse::<usize>() {
            return if (1..=items.len()).contains(&choice) {
                Ok(Some(choice - 1))
            } else {
                Err(InputError::Invalid(answer))
            };
        }
        items
            .iter()
            .position(|item| item.eq_ignore_ascii_case(trimmed))
            .map(Some)
            .ok_or(InputError::Invalid(answer))
    }
}
