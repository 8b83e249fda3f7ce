//! Applying the plan to the filesystem
//!
//! Two strategies are offered:
//!
//! - **Direct**: rename each file straight to its target, in plan order.
//!   A failure stops the sequence; renames already done stay done.
//! - **Staged**: first move every file to a unique temporary name in its
//!   folder, then move each temporary to its target. Chains such as
//!   `a -> b, b -> a` work, and a failure while staging puts the staged
//!   files back. A failure in the second phase restores the files that
//!   have not reached their target yet, where possible.
//!
//! Neither strategy is transactional across the whole batch.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::fs::Filesystem;

use super::error::SessionError;

/// How a confirmed plan is written to disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitStrategy {
    /// One rename per file, no rollback
    #[default]
    Direct,
    /// Two-phase rename through temporary names
    Staged,
}

/// A single applied rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// What a commit did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommitReport {
    /// Renames applied, in order
    pub renamed: Vec<Rename>,
    /// Entries whose target equals their origin
    pub unchanged: usize,
}

/// Apply `moves` with the chosen strategy
pub(crate) fn commit<F: Filesystem>(
    fs: &F,
    strategy: CommitStrategy,
    moves: Vec<Rename>,
) -> Result<CommitReport, SessionError> {
    let total = moves.len();
    let (pending, unchanged): (Vec<Rename>, Vec<Rename>) =
        moves.into_iter().partition(|mv| mv.from != mv.to);

    tracing::debug!(total, skipped = unchanged.len(), ?strategy, "committing plan");

    let renamed = match strategy {
        CommitStrategy::Direct => commit_direct(fs, pending)?,
        CommitStrategy::Staged => commit_staged(fs, pending)?,
    };

    Ok(CommitReport {
        renamed,
        unchanged: unchanged.len(),
    })
}

fn commit_direct<F: Filesystem>(fs: &F, moves: Vec<Rename>) -> Result<Vec<Rename>, SessionError> {
    let mut done = Vec::with_capacity(moves.len());
    for mv in moves {
        if let Err(source) = fs.rename(&mv.from, &mv.to) {
            return Err(SessionError::Rename {
                from: mv.from,
                to: mv.to,
                renamed: done.len(),
                source,
            });
        }
        tracing::info!(from = %mv.from.display(), to = %mv.to.display(), "renamed");
        done.push(mv);
    }
    Ok(done)
}

fn commit_staged<F: Filesystem>(fs: &F, moves: Vec<Rename>) -> Result<Vec<Rename>, SessionError> {
    let mut counter = 0usize;
    let mut staged: Vec<(Rename, PathBuf)> = Vec::with_capacity(moves.len());

    for mv in moves {
        let temp = staging_path(fs, &mv.from, &mut counter);
        if let Err(source) = fs.rename(&mv.from, &temp) {
            restore(fs, &staged);
            return Err(SessionError::Rename {
                from: mv.from,
                to: temp,
                renamed: 0,
                source,
            });
        }
        tracing::debug!(from = %mv.from.display(), temp = %temp.display(), "staged");
        staged.push((mv, temp));
    }

    let mut done = Vec::with_capacity(staged.len());
    for (position, (mv, temp)) in staged.iter().enumerate() {
        if let Err(source) = fs.rename(temp, &mv.to) {
            restore(fs, &staged[position..]);
            return Err(SessionError::Rename {
                from: mv.from.clone(),
                to: mv.to.clone(),
                renamed: done.len(),
                source,
            });
        }
        tracing::info!(from = %mv.from.display(), to = %mv.to.display(), "renamed");
        done.push(mv.clone());
    }
    Ok(done)
}

/// Move staged temporaries back to their origin, newest first.
/// An origin already taken by a finished rename is left alone.
fn restore<F: Filesystem>(fs: &F, staged: &[(Rename, PathBuf)]) {
    for (mv, temp) in staged.iter().rev() {
        if fs.exists(&mv.from) {
            tracing::warn!(
                temp = %temp.display(),
                origin = %mv.from.display(),
                "origin is taken, leaving staged file in place"
            );
            continue;
        }
        if let Err(err) = fs.rename(temp, &mv.from) {
            tracing::warn!(
                temp = %temp.display(),
                origin = %mv.from.display(),
                %err,
                "could not restore staged file"
            );
        }
    }
}

/// Unused hidden name next to `origin`
fn staging_path<F: Filesystem>(fs: &F, origin: &Path, counter: &mut usize) -> PathBuf {
    let folder = origin.parent().unwrap_or_else(|| Path::new(""));
    let pid = std::process::id();
    loop {
        let candidate = folder.join(format!(".renamr-{pid}-{counter}.tmp"));
        *counter += 1;
        if !fs.exists(&candidate) {
            return candidate;
        }
    }
}
