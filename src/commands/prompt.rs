//! Prompt-driven action handler
//!
//! Shows the plan, asks for a command word and then for the command's
//! arguments. The same handler serves the interactive terminal and
//! scripted `-c` runs; only the `UserInput` behind it differs.

use std::path::PathBuf;

use crate::index::ItemIndex;
use crate::pattern::Pattern;
use crate::session::{Action, ActionHandler, DoneChoice, Plan, ReorderMethod};
use crate::ui::{InputError, OutputWriter, UserInput, plan_lines};

use super::parse::{ACTION_PROMPT, Command};

const INDEX_OUT_OF_RANGE: &str = "Index out of range.";

/// Turns operator answers into session actions
pub struct PromptHandler<I: UserInput, O: OutputWriter> {
    input: I,
    output: O,
    confirm_commit: bool,
}

/// Early exit from a command with the action to hand back
type Step<T> = std::result::Result<T, Action>;

impl<I: UserInput, O: OutputWriter> PromptHandler<I, O> {
    #[must_use]
    pub const fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            confirm_commit: false,
        }
    }

    /// Ask for a yes/no confirmation before committing
    #[must_use]
    pub fn with_confirmation(mut self, confirm_commit: bool) -> Self {
        self.confirm_commit = confirm_commit;
        self
    }

    #[must_use]
    pub const fn input(&self) -> &I {
        &self.input
    }

    #[must_use]
    pub const fn output(&self) -> &O {
        &self.output
    }

    fn handle(&self, command: Command, plan: &Plan<'_>) -> Step<Action> {
        tracing::trace!(%command, "command received");
        match command {
            Command::Pattern => self.read_pattern(),
            Command::Insert => {
                let raw = self.ask("Input a path", false)?;
                Ok(Action::Add(PathBuf::from(raw.trim())))
            }
            Command::Exclude => Ok(Action::Remove(self.read_index("Input an index", plan)?)),
            Command::Reorder => Ok(Action::Reorder(self.read_reorder()?)),
            Command::Swap => {
                let left = self.read_index("Input first to swap", plan)?;
                let right = self.read_index("Input second to swap", plan)?;
                Ok(Action::Swap(left, right))
            }
            Command::Confirm => self.confirm(plan),
            Command::Abort => Ok(Action::Done(DoneChoice::Abort)),
        }
    }

    fn read_pattern(&self) -> Step<Action> {
        let raw = self.ask("Input your pattern", true)?;
        match raw.parse::<Pattern>() {
            Ok(pattern) => Ok(Action::SetPattern(pattern)),
            Err(err) => {
                self.output.error(&err.to_string());
                Err(Action::NoOp)
            }
        }
    }

    fn read_index(&self, prompt: &str, plan: &Plan<'_>) -> Step<ItemIndex> {
        let raw = self.ask(prompt, false)?;
        raw.parse::<ItemIndex>()
            .and_then(|index| index.within(plan.len()))
            .map_err(|err| {
                tracing::debug!(input = %raw, %err, "rejected index");
                self.output.error(INDEX_OUT_OF_RANGE);
                Action::NoOp
            })
    }

    fn read_reorder(&self) -> Step<ReorderMethod> {
        let labels: Vec<String> = ReorderMethod::ALL
            .iter()
            .map(|method| method.label().to_string())
            .collect();
        match self.input.prompt_select("Select a reorder method", &labels, Some(0)) {
            Ok(Some(choice)) => ReorderMethod::ALL.get(choice).copied().ok_or(Action::NoOp),
            Ok(None) => Err(Action::NoOp),
            Err(InputError::Invalid(answer)) => {
                self.output.error(&format!("Unknown reorder method: {answer}"));
                Err(Action::NoOp)
            }
            Err(err) => Err(self.input_failed(&err)),
        }
    }

    fn confirm(&self, plan: &Plan<'_>) -> Step<Action> {
        if !self.confirm_commit {
            return Ok(Action::Done(DoneChoice::Confirm));
        }
        let changes = plan.entries().filter(|entry| !entry.is_unchanged()).count();
        match self
            .input
            .prompt_confirm(&format!("Rename {changes} file(s)?"), false)
        {
            Ok(Some(true)) => Ok(Action::Done(DoneChoice::Confirm)),
            Ok(Some(false) | None) => {
                self.output.info("Nothing renamed yet.");
                Ok(Action::NoOp)
            }
            Err(InputError::Invalid(answer)) => {
                self.output.error(&format!("Expected yes or no, got: {answer}"));
                Ok(Action::NoOp)
            }
            Err(err) => Err(self.input_failed(&err)),
        }
    }

    /// Read an argument for the current command
    fn ask(&self, prompt: &str, allow_empty: bool) -> Step<String> {
        match self.input.prompt_text(prompt, None, allow_empty) {
            Ok(Some(answer)) => Ok(answer),
            Ok(None) => Err(Action::NoOp),
            Err(err) => Err(self.input_failed(&err)),
        }
    }

    /// Input broke down in the middle of a command; nothing gets renamed
    fn input_failed(&self, err: &InputError) -> Action {
        match err {
            InputError::Exhausted => {
                self.output
                    .error("Command script ended in the middle of a command.");
            }
            other => self.output.error(&other.to_string()),
        }
        Action::Done(DoneChoice::Abort)
    }
}

impl<I: UserInput, O: OutputWriter> ActionHandler for PromptHandler<I, O> {
    fn next_action(&mut self, plan: &Plan<'_>) -> Action {
        self.output.plan(&plan_lines(plan));

        let word = match self.input.prompt_text(ACTION_PROMPT, None, false) {
            Ok(Some(word)) => word,
            Ok(None) => return Action::Done(DoneChoice::Abort),
            Err(InputError::Exhausted) => {
                tracing::debug!("command script finished, confirming");
                return Action::Done(DoneChoice::Confirm);
            }
            Err(err) => return self.input_failed(&err),
        };

        match word.parse::<Command>() {
            Ok(command) => self.handle(command, plan).unwrap_or_else(|action| action),
            Err(err) => {
                self.output.warning(&err.to_string());
                Action::NoOp
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Outcome, Session};
    use crate::testing::MemoryFs;
    use crate::ui::{MemoryWriter, MessageLevel, ScriptedInput};

    fn handler<'w>(
        answers: &[&str],
        writer: &'w MemoryWriter,
    ) -> PromptHandler<ScriptedInput, &'w MemoryWriter> {
        PromptHandler::new(ScriptedInput::new(answers.iter().copied()), writer)
    }

    fn sample_fs() -> MemoryFs {
        MemoryFs::with_files(["/d/a.txt", "/d/b.txt", "/d/c.txt"])
    }

    fn sample_session(fs: &MemoryFs) -> Session<&MemoryFs> {
        Session::new(fs, Pattern::default(), ["/d/a.txt", "/d/b.txt", "/d/c.txt"])
    }

    #[test]
    fn test_pattern_command() {
        let writer = MemoryWriter::new();
        let fs = sample_fs();
        let session = sample_session(&fs);
        let mut handler = handler(&["p", "{i}_{o}"], &writer);

        let action = handler.next_action(&session.plan());

        assert_eq!(action, Action::SetPattern("{i}_{o}".parse().unwrap()));
        assert!(!writer.at_level(MessageLevel::Normal).is_empty());
    }

    #[test]
    fn test_bad_pattern_reports_and_noops() {
        let writer = MemoryWriter::new();
        let fs = sample_fs();
        let session = sample_session(&fs);
        let mut handler = handler(&["pattern", "{i"], &writer);

        assert_eq!(handler.next_action(&session.plan()), Action::NoOp);
        assert_eq!(writer.at_level(MessageLevel::Error).len(), 1);
    }

    #[test]
    fn test_insert_command() {
        let writer = MemoryWriter::new();
        let fs = sample_fs();
        let session = sample_session(&fs);
        let mut handler = handler(&["i", "/d/new.txt"], &writer);

        assert_eq!(
            handler.next_action(&session.plan()),
            Action::Add(PathBuf::from("/d/new.txt"))
        );
    }

    #[test]
    fn test_exclude_validates_index() {
        let writer = MemoryWriter::new();
        let fs = sample_fs();
        let session = sample_session(&fs);
        let mut handler = handler(&["e", "2", "e", "4", "e", "0", "e", "two"], &writer);
        let plan = session.plan();

        assert_eq!(
            handler.next_action(&plan),
            Action::Remove(ItemIndex::new(2).unwrap())
        );
        assert_eq!(handler.next_action(&plan), Action::NoOp);
        assert_eq!(handler.next_action(&plan), Action::NoOp);
        assert_eq!(handler.next_action(&plan), Action::NoOp);
        assert_eq!(
            writer.at_level(MessageLevel::Error),
            [INDEX_OUT_OF_RANGE, INDEX_OUT_OF_RANGE, INDEX_OUT_OF_RANGE]
        );
    }

    #[test]
    fn test_swap_command() {
        let writer = MemoryWriter::new();
        let fs = sample_fs();
        let session = sample_session(&fs);
        let mut handler = handler(&["s", "1", "3", "swap", "1", "9"], &writer);
        let plan = session.plan();

        assert_eq!(
            handler.next_action(&plan),
            Action::Swap(ItemIndex::new(1).unwrap(), ItemIndex::new(3).unwrap())
        );
        assert_eq!(handler.next_action(&plan), Action::NoOp);
    }

    #[test]
    fn test_reorder_choices() {
        let writer = MemoryWriter::new();
        let fs = sample_fs();
        let session = sample_session(&fs);
        let mut handler = handler(&["r", "1", "r", "2", "r", "3", "r", "7"], &writer);
        let plan = session.plan();

        assert_eq!(
            handler.next_action(&plan),
            Action::Reorder(ReorderMethod::SortByName)
        );
        assert_eq!(
            handler.next_action(&plan),
            Action::Reorder(ReorderMethod::SortByModifiedTime)
        );
        assert_eq!(
            handler.next_action(&plan),
            Action::Reorder(ReorderMethod::Reverse)
        );
        assert_eq!(handler.next_action(&plan), Action::NoOp);
        assert_eq!(writer.at_level(MessageLevel::Error).len(), 1);
    }

    #[test]
    fn test_unknown_word_warns() {
        let writer = MemoryWriter::new();
        let fs = sample_fs();
        let session = sample_session(&fs);
        let mut handler = handler(&["x"], &writer);

        assert_eq!(handler.next_action(&session.plan()), Action::NoOp);
        assert_eq!(
            writer.at_level(MessageLevel::Warning),
            ["Unknown command: x"]
        );
    }

    #[test]
    fn test_exhausted_script_confirms() {
        let writer = MemoryWriter::new();
        let fs = sample_fs();
        let session = sample_session(&fs);
        let mut handler = handler(&[], &writer);

        assert_eq!(
            handler.next_action(&session.plan()),
            Action::Done(DoneChoice::Confirm)
        );
    }

    #[test]
    fn test_script_ending_mid_command_aborts() {
        let writer = MemoryWriter::new();
        let fs = sample_fs();
        let session = sample_session(&fs);
        let mut handler = handler(&["s", "1"], &writer);

        assert_eq!(
            handler.next_action(&session.plan()),
            Action::Done(DoneChoice::Abort)
        );
        assert_eq!(writer.at_level(MessageLevel::Error).len(), 1);
    }

    #[test]
    fn test_confirmation_prompt() {
        let writer = MemoryWriter::new();
        let fs = sample_fs();
        let session = sample_session(&fs);
        let mut handler = handler(&["c", "n", "c", "y"], &writer).with_confirmation(true);
        let plan = session.plan();

        assert_eq!(handler.next_action(&plan), Action::NoOp);
        assert_eq!(handler.next_action(&plan), Action::Done(DoneChoice::Confirm));
        assert_eq!(handler.input().remaining(), 0);
    }

    #[test]
    fn test_abort_command() {
        let writer = MemoryWriter::new();
        let fs = sample_fs();
        let session = sample_session(&fs);
        let mut handler = handler(&["a"], &writer);

        assert_eq!(
            handler.next_action(&session.plan()),
            Action::Done(DoneChoice::Abort)
        );
    }

    #[test]
    fn test_drives_full_session() {
        let writer = MemoryWriter::new();
        let fs = MemoryFs::with_files(["/d/b.txt", "/d/a.txt"]);
        let mut session = Session::new(&fs, Pattern::default(), ["/d/b.txt", "/d/a.txt"]);
        let mut handler = handler(&["p", "{i}_{o}", "r", "3", "e", "1"], &writer);

        let outcome = session.interact(&mut handler).unwrap();

        let Outcome::Committed(report) = outcome else {
            panic!("expected commit");
        };
        assert_eq!(report.renamed.len(), 1);
        assert!(fs.contains("/d/1_a.txt"));
        assert!(fs.contains("/d/b.txt"));
    }
}
