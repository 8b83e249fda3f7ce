//! Canonical path storage
//!
//! Paths live in an append-only arena; previews refer to them by `SlotId`
//! so reordering or removing previews never invalidates a reference.
//! Removal tombstones the slot and frees the path for re-insertion.

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Stable handle to a path in a `PathArena`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

/// Deduplicated set of canonical paths with stable handles
#[derive(Debug, Default)]
pub struct PathArena {
    slots: Vec<Option<PathBuf>>,
    members: HashSet<PathBuf>,
}

impl PathArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a canonical path; `None` if it is already present
    pub fn insert(&mut self, canonical: PathBuf) -> Option<SlotId> {
        if self.members.contains(&canonical) {
            return None;
        }
        self.members.insert(canonical.clone());
        self.slots.push(Some(canonical));
        Some(SlotId(self.slots.len() - 1))
    }

    /// Path stored in `id`
    ///
    /// Tombstoned slots read as an empty path; previews never hold one.
    #[must_use]
    pub fn get(&self, id: SlotId) -> &Path {
        self.slots
            .get(id.0)
            .and_then(Option::as_deref)
            .unwrap_or_else(|| Path::new(""))
    }

    /// Remove the path stored in `id`
    pub fn remove(&mut self, id: SlotId) -> Option<PathBuf> {
        let path = self.slots.get_mut(id.0)?.take()?;
        self.members.remove(&path);
        Some(path)
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.members.contains(path)
    }

    /// Number of live paths
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Final component of `path` as text, empty for roots
#[must_use]
pub fn file_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map_or(Cow::Borrowed(""), |name| name.to_string_lossy())
}
