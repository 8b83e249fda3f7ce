//! Rename previews and the read-only plan view handed to handlers

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::index::ItemIndex;
use crate::pattern::Pattern;

use super::paths::{self, PathArena, SlotId};

/// A managed path paired with the name it will receive on commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub(crate) origin: SlotId,
    pub(crate) new_name: String,
}

impl Preview {
    pub(crate) const fn new(origin: SlotId) -> Self {
        Self {
            origin,
            new_name: String::new(),
        }
    }

    /// Handle of the origin path
    #[must_use]
    pub const fn origin(&self) -> SlotId {
        self.origin
    }

    /// Name generated by the active pattern
    #[must_use]
    pub fn new_name(&self) -> &str {
        &self.new_name
    }
}

/// Snapshot of the session the handler sees before choosing an action
#[derive(Debug, Clone, Copy)]
pub struct Plan<'a> {
    pattern: &'a Pattern,
    previews: &'a [Preview],
    paths: &'a PathArena,
}

impl<'a> Plan<'a> {
    pub(crate) const fn new(pattern: &'a Pattern, previews: &'a [Preview], paths: &'a PathArena) -> Self {
        Self {
            pattern,
            previews,
            paths,
        }
    }

    /// Active pattern
    #[must_use]
    pub const fn pattern(&self) -> &'a Pattern {
        self.pattern
    }

    /// Previews in plan order
    #[must_use]
    pub const fn previews(&self) -> &'a [Preview] {
        self.previews
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.previews.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    /// Entry at `index`, if it is inside the plan
    #[must_use]
    pub fn get(&self, index: ItemIndex) -> Option<PlanEntry<'a>> {
        let offset = index.zero_based();
        self.previews
            .get(offset)
            .map(|preview| self.entry(offset, preview))
    }

    /// Entries in plan order
    pub fn entries(&self) -> impl Iterator<Item = PlanEntry<'a>> + use<'a> {
        let plan = *self;
        let previews = self.previews;
        previews
            .iter()
            .enumerate()
            .map(move |(offset, preview)| plan.entry(offset, preview))
    }

    fn entry(&self, offset: usize, preview: &'a Preview) -> PlanEntry<'a> {
        PlanEntry {
            index: ItemIndex::for_offset(offset),
            origin: self.paths.get(preview.origin),
            new_name: &preview.new_name,
        }
    }
}

/// One resolved line of the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntry<'a> {
    /// One-based position
    pub index: ItemIndex,
    /// Canonical path being renamed
    pub origin: &'a Path,
    /// Name the file will receive
    pub new_name: &'a str,
}

impl<'a> PlanEntry<'a> {
    /// Folder holding the origin
    #[must_use]
    pub fn folder(&self) -> &'a Path {
        self.origin.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Current file name of the origin
    #[must_use]
    pub fn old_name(&self) -> Cow<'a, str> {
        paths::file_name(self.origin)
    }

    /// Full path the origin moves to on commit
    #[must_use]
    pub fn target(&self) -> PathBuf {
        self.folder().join(self.new_name)
    }

    /// Whether committing leaves this file where it is
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.target() == self.origin
    }
}
