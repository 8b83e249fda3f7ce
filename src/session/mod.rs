//! Interactive rename session
//!
//! The session owns everything that changes while the operator works on a
//! rename plan: the active pattern, the deduplicated set of canonical paths
//! and the ordered list of previews. An `ActionHandler` is asked for one
//! `Action` per iteration; the session applies it, regenerates the affected
//! names and asks again until the handler confirms or aborts.
//!
//! # Workflow
//!
//! ```text
//! Session::new(paths)
//!     ↓ canonicalize, dedupe, sort, generate names
//! ┌─→ handler.next_action(plan)
//! │       ↓
//! │   apply(action)
//! │   ├─ SetPattern / Swap / Reorder / Add / Remove → regenerate → loop
//! │   ├─ NoOp → loop
//! │   ├─ Done(Abort)   → Outcome::Aborted
//! │   └─ Done(Confirm) → commit → Outcome::Committed
//! │                         └─ rename error → SessionState::Failed
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use renamr::fs::StdFilesystem;
//! use renamr::pattern::Pattern;
//! use renamr::session::{Action, DoneChoice, Plan, ReorderMethod, Session};
//!
//! let pattern: Pattern = "{i}_{o}".parse().unwrap();
//! let mut session = Session::new(StdFilesystem, pattern, ["b.txt", "a.txt"]);
//! let mut script = vec![
//!     Action::Reorder(ReorderMethod::SortByName),
//!     Action::Done(DoneChoice::Confirm),
//! ]
//! .into_iter();
//! session
//!     .interact(&mut |_: &Plan<'_>| script.next().unwrap_or(Action::Done(DoneChoice::Abort)))
//!     .unwrap();
//! ```

pub mod action;
pub mod commit;
pub mod error;
pub mod paths;
pub mod preview;

pub use action::{Action, ActionHandler, DoneChoice, Flow, Outcome, ReorderMethod};
pub use commit::{CommitReport, CommitStrategy, Rename};
pub use error::SessionError;
pub use paths::{PathArena, SlotId};
pub use preview::{Plan, PlanEntry, Preview};

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::fs::{Filesystem, StdFilesystem};
use crate::index::ItemIndex;
use crate::pattern::Pattern;

/// Session result type
pub type Result<T> = std::result::Result<T, SessionError>;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next action
    Active,
    /// Renames were applied
    Committed,
    /// Ended without touching the filesystem
    Aborted,
    /// A rename failed during commit; the plan no longer matches the disk
    Failed,
}

/// The rename session engine
pub struct Session<F: Filesystem = StdFilesystem> {
    fs: F,
    pattern: Pattern,
    previews: Vec<Preview>,
    paths: PathArena,
    strategy: CommitStrategy,
    state: SessionState,
}

impl<F: Filesystem> Session<F> {
    /// Start a session over `inputs`.
    ///
    /// Every input is canonicalized; unresolvable paths and duplicates are
    /// dropped silently. Survivors are ordered by canonical path and named
    /// with `pattern`.
    pub fn new<I, P>(fs: F, pattern: Pattern, inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let canonical: BTreeSet<_> = inputs
            .into_iter()
            .filter_map(|input| resolve(&fs, input.as_ref()))
            .collect();

        let mut paths = PathArena::new();
        let previews = canonical
            .into_iter()
            .filter_map(|path| paths.insert(path))
            .map(Preview::new)
            .collect();

        let mut session = Self {
            fs,
            pattern,
            previews,
            paths,
            strategy: CommitStrategy::default(),
            state: SessionState::Active,
        };
        session.regenerate_from(0);
        tracing::debug!(files = session.previews.len(), "session started");
        session
    }

    /// Choose how a confirmed plan is written to disk
    #[must_use]
    pub fn with_commit_strategy(mut self, strategy: CommitStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Read-only view of the current plan
    #[must_use]
    pub fn plan(&self) -> Plan<'_> {
        Plan::new(&self.pattern, &self.previews, &self.paths)
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn commit_strategy(&self) -> CommitStrategy {
        self.strategy
    }

    /// Number of files in the plan
    #[must_use]
    pub fn len(&self) -> usize {
        self.previews.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    /// Run the interaction loop until the handler confirms or aborts.
    ///
    /// Actions addressing positions outside the plan are logged and
    /// ignored; the loop keeps going.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Rename` if a rename fails during commit and
    /// `SessionError::Finished` if the session already ended.
    pub fn interact<H>(&mut self, handler: &mut H) -> Result<Outcome>
    where
        H: ActionHandler + ?Sized,
    {
        loop {
            let action = handler.next_action(&self.plan());
            match self.apply(action) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Finished(outcome)) => return Ok(outcome),
                Err(err) if err.is_recoverable() => {
                    tracing::warn!(%err, "action rejected");
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Apply a single action.
    ///
    /// # Errors
    ///
    /// - `SessionError::Index` if `Swap` or `Remove` addresses a position
    ///   outside the plan; the state is left unchanged.
    /// - `SessionError::Rename` if committing fails. Renames already applied
    ///   are not undone and the session ends in `SessionState::Failed`.
    /// - `SessionError::Finished` once the session has committed, aborted
    ///   or failed.
    pub fn apply(&mut self, action: Action) -> Result<Flow> {
        if self.state != SessionState::Active {
            return Err(SessionError::Finished);
        }

        match action {
            Action::NoOp => {}
            Action::Done(DoneChoice::Abort) => {
                self.state = SessionState::Aborted;
                tracing::debug!("session aborted");
                return Ok(Flow::Finished(Outcome::Aborted));
            }
            Action::Done(DoneChoice::Confirm) => {
                let report = self.commit().inspect_err(|_| {
                    self.state = SessionState::Failed;
                })?;
                self.state = SessionState::Committed;
                return Ok(Flow::Finished(Outcome::Committed(report)));
            }
            Action::SetPattern(pattern) => {
                tracing::debug!(pattern = %pattern, "pattern changed");
                self.pattern = pattern;
                self.regenerate_from(0);
            }
            Action::Swap(left, right) => self.swap(left, right)?,
            Action::Reorder(method) => self.reorder(method),
            Action::Add(path) => self.add(&path),
            Action::Remove(index) => self.remove(index)?,
        }

        Ok(Flow::Continue)
    }

    fn swap(&mut self, left: ItemIndex, right: ItemIndex) -> Result<()> {
        let len = self.previews.len();
        let left = left.within(len)?.zero_based();
        let right = right.within(len)?.zero_based();
        self.previews.swap(left, right);
        self.regenerate_from(0);
        Ok(())
    }

    fn reorder(&mut self, method: ReorderMethod) {
        let paths = &self.paths;
        match method {
            ReorderMethod::SortByName => {
                self.previews
                    .sort_by(|a, b| paths.get(a.origin).cmp(paths.get(b.origin)));
            }
            ReorderMethod::SortByModifiedTime => {
                let fs = &self.fs;
                self.previews
                    .sort_by_cached_key(|preview| modified_time(fs, paths.get(preview.origin)));
            }
            ReorderMethod::Reverse => self.previews.reverse(),
        }
        self.regenerate_from(0);
    }

    fn add(&mut self, path: &Path) {
        let Some(canonical) = resolve(&self.fs, path) else {
            return;
        };
        let Some(slot) = self.paths.insert(canonical) else {
            tracing::debug!(path = %path.display(), "path already in plan");
            return;
        };

        let offset = self.previews.len();
        self.previews.push(Preview::new(slot));
        self.regenerate_from(offset);
    }

    fn remove(&mut self, index: ItemIndex) -> Result<()> {
        let offset = index.within(self.previews.len())?.zero_based();
        let removed = self.previews.remove(offset);
        self.paths.remove(removed.origin);
        // earlier entries keep their positions, so their names stand
        self.regenerate_from(offset);
        Ok(())
    }

    fn commit(&self) -> Result<CommitReport> {
        let moves = self
            .plan()
            .entries()
            .map(|entry| Rename {
                from: entry.origin.to_path_buf(),
                to: entry.target(),
            })
            .collect();
        commit::commit(&self.fs, self.strategy, moves)
    }

    /// Recompute names for every preview at or after `start`
    fn regenerate_from(&mut self, start: usize) {
        let pattern = &self.pattern;
        let paths = &self.paths;
        for (offset, preview) in self.previews.iter_mut().enumerate().skip(start) {
            let name = paths::file_name(paths.get(preview.origin));
            preview.new_name = pattern.generate(&name, ItemIndex::for_offset(offset));
        }
    }
}

/// Canonical form of `input`, or `None` if it cannot be managed.
///
/// Paths that do not resolve, and paths whose file name is missing or not
/// valid UTF-8, are skipped: pattern tokens work on text and could not
/// reproduce such a name.
fn resolve<F: Filesystem>(fs: &F, input: &Path) -> Option<PathBuf> {
    let canonical = fs
        .canonicalize(input)
        .inspect_err(|err| {
            tracing::debug!(path = %input.display(), %err, "skipping unusable path");
        })
        .ok()?;
    if canonical.file_name().and_then(OsStr::to_str).is_none() {
        tracing::warn!(path = %canonical.display(), "skipping path without a UTF-8 file name");
        return None;
    }
    Some(canonical)
}

/// Modification time used for ordering; unreadable times sort first
fn modified_time<F: Filesystem>(fs: &F, path: &Path) -> Option<SystemTime> {
    fs.modified(path)
        .inspect_err(|err| {
            tracing::warn!(path = %path.display(), %err, "could not read modification time");
        })
        .ok()
}

/// Start a session over `inputs` and drive it with `handler` until it ends.
///
/// # Errors
///
/// Returns `SessionError::Rename` if committing fails.
pub fn run<F, H, I, P>(fs: F, pattern: Pattern, inputs: I, handler: &mut H) -> Result<Outcome>
where
    F: Filesystem,
    H: ActionHandler + ?Sized,
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Session::new(fs, pattern, inputs).interact(handler)
}
