//! Human-readable rendering of the rename plan
//!
//! ```text
//! ---
//! Current pattern: [{i}_{o}]
//! /home/me/photos
//!   (1)  a.jpg -> 1_a.jpg
//!   (2)  b.jpg -> 2_b.jpg
//! ---
//! ```

use std::fmt;
use std::path::PathBuf;

use crate::index::ItemIndex;
use crate::session::Plan;

/// One line of the rendered plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanLine {
    /// Block delimiter
    Separator,
    /// Raw text of the active pattern
    Pattern(String),
    /// Plan has no entries
    Empty,
    /// Folder heading for the entries that follow
    Folder(PathBuf),
    /// A single rename
    Entry {
        index: ItemIndex,
        old_name: String,
        new_name: String,
    },
}

impl fmt::Display for PlanLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Separator => f.write_str("---"),
            Self::Pattern(raw) => write!(f, "Current pattern: [{raw}]"),
            Self::Empty => f.write_str("No file selected."),
            Self::Folder(folder) => write!(f, "{}", folder.display()),
            Self::Entry {
                index,
                old_name,
                new_name,
            } => write!(f, "  ({index})  {old_name} -> {new_name}"),
        }
    }
}

/// Lay out the plan, starting a new folder heading whenever the source
/// folder changes between consecutive entries
#[must_use]
pub fn plan_lines(plan: &Plan<'_>) -> Vec<PlanLine> {
    let mut lines = vec![PlanLine::Separator, PlanLine::Pattern(plan.pattern().raw())];

    if plan.is_empty() {
        lines.push(PlanLine::Empty);
    } else {
        let mut last_folder = None;
        for entry in plan.entries() {
            let folder = entry.folder();
            if last_folder != Some(folder) {
                lines.push(PlanLine::Folder(folder.to_path_buf()));
                last_folder = Some(folder);
            }
            lines.push(PlanLine::Entry {
                index: entry.index,
                old_name: entry.old_name().into_owned(),
                new_name: entry.new_name.to_string(),
            });
        }
    }

    lines.push(PlanLine::Separator);
    lines
}
