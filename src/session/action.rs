//! Actions a handler can submit to the session

use std::path::PathBuf;

use crate::index::ItemIndex;
use crate::pattern::Pattern;

use super::commit::CommitReport;
use super::preview::Plan;

/// How the operator ends the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoneChoice {
    /// Apply every rename in the plan
    Confirm,
    /// Leave the filesystem untouched
    Abort,
}

/// Ways to reorder the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderMethod {
    /// Ascending canonical path
    SortByName,
    /// Ascending last-modified time
    SortByModifiedTime,
    /// Reverse the current order
    Reverse,
}

impl ReorderMethod {
    /// All methods in menu order
    pub const ALL: [Self; 3] = [Self::SortByName, Self::SortByModifiedTime, Self::Reverse];

    /// Human-readable menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SortByName => "Sort by name",
            Self::SortByModifiedTime => "Sort by last modified time",
            Self::Reverse => "Reverse",
        }
    }
}

/// One step requested by the action handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the state unchanged
    NoOp,
    /// End the session
    Done(DoneChoice),
    /// Replace the active pattern
    SetPattern(Pattern),
    /// Exchange two plan positions
    Swap(ItemIndex, ItemIndex),
    /// Reorder the whole plan
    Reorder(ReorderMethod),
    /// Bring another path under management
    Add(PathBuf),
    /// Drop a plan entry and its path
    Remove(ItemIndex),
}

/// Whether the interaction loop keeps going after an action
#[derive(Debug)]
pub enum Flow {
    /// Ask the handler for the next action
    Continue,
    /// The session reached a terminal state
    Finished(Outcome),
}

/// Terminal result of a session
#[derive(Debug)]
pub enum Outcome {
    /// Renames were applied
    Committed(CommitReport),
    /// The operator aborted; nothing was renamed
    Aborted,
}

/// Source of actions for the interaction loop
///
/// Called once per iteration with a read-only view of the current plan.
/// Implementations may block on a terminal, replay a script or return
/// canned actions in tests.
pub trait ActionHandler {
    /// Decide the next action for the current plan
    fn next_action(&mut self, plan: &Plan<'_>) -> Action;
}

impl<F> ActionHandler for F
where
    F: FnMut(&Plan<'_>) -> Action,
{
    fn next_action(&mut self, plan: &Plan<'_>) -> Action {
        self(plan)
    }
}
