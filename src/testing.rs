//! Testing utilities for renamr
//!
//! This module provides helper types for writing tests: an in-memory
//! `Filesystem` with controllable timestamps and injected failures, a
//! handler that replays a fixed list of actions, and a temporary directory
//! wrapper for tests that need real files.
//!
//! Only available when compiled with `cfg(test)`.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::fs::Filesystem;
use crate::session::{Action, ActionHandler, DoneChoice, Plan};

#[derive(Debug, Clone)]
struct MemoryFile {
    modified: SystemTime,
    content: String,
}

/// In-memory filesystem
///
/// Paths are taken as already canonical unless registered with `alias`.
/// Renames overwrite an existing target, like `rename(2)` on Unix.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, MemoryFile>>,
    aliases: RefCell<HashMap<PathBuf, PathBuf>>,
    failing_renames: RefCell<HashSet<PathBuf>>,
    failing_metadata: RefCell<HashSet<PathBuf>>,
    renames: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl MemoryFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filesystem holding the given files, all modified at the epoch
    pub fn with_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let fs = Self::new();
        for path in paths {
            fs.add_file_at(path, 0);
        }
        fs
    }

    /// Add a file modified `secs` seconds after the epoch
    pub fn add_file_at(&self, path: impl AsRef<Path>, secs: u64) {
        self.files.borrow_mut().insert(
            path.as_ref().to_path_buf(),
            MemoryFile {
                modified: UNIX_EPOCH + Duration::from_secs(secs),
                content: String::new(),
            },
        );
    }

    /// Make `alias` canonicalize to `target`
    pub fn alias(&self, alias: impl AsRef<Path>, target: impl AsRef<Path>) {
        self.aliases
            .borrow_mut()
            .insert(alias.as_ref().to_path_buf(), target.as_ref().to_path_buf());
    }

    /// Make every rename away from `path` fail
    pub fn fail_rename_from(&self, path: impl AsRef<Path>) {
        self.failing_renames
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    /// Make metadata reads of `path` fail
    pub fn fail_metadata(&self, path: impl AsRef<Path>) {
        self.failing_metadata
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    pub fn set_content(&self, path: impl AsRef<Path>, content: &str) {
        if let Some(file) = self.files.borrow_mut().get_mut(path.as_ref()) {
            file.content = content.to_string();
        }
    }

    #[must_use]
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .get(path.as_ref())
            .map(|file| file.content.clone())
    }

    #[must_use]
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.borrow().contains_key(path.as_ref())
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }

    /// Successful renames in the order they happened
    #[must_use]
    pub fn renames(&self) -> Vec<(PathBuf, PathBuf)> {
        self.renames.borrow().clone()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} not found", path.display()),
    )
}

impl Filesystem for MemoryFs {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        let resolved = self
            .aliases
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_else(|| path.to_path_buf());
        if self.contains(&resolved) {
            Ok(resolved)
        } else {
            Err(not_found(path))
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.failing_renames.borrow().contains(from) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "injected rename failure",
            ));
        }
        let mut files = self.files.borrow_mut();
        let file = files.remove(from).ok_or_else(|| not_found(from))?;
        files.insert(to.to_path_buf(), file);
        self.renames
            .borrow_mut()
            .push((from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        if self.failing_metadata.borrow().contains(path) {
            return Err(io::Error::other("injected metadata failure"));
        }
        self.files
            .borrow()
            .get(path)
            .map(|file| file.modified)
            .ok_or_else(|| not_found(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.contains(path)
    }
}

/// Handler that replays a fixed list of actions, then aborts
///
/// Records the plan length seen at every call.
#[derive(Debug)]
pub struct ScriptedActions {
    actions: VecDeque<Action>,
    seen: Vec<usize>,
}

impl ScriptedActions {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            seen: Vec::new(),
        }
    }

    /// Plan lengths observed, one per call
    #[must_use]
    pub fn seen(&self) -> &[usize] {
        &self.seen
    }
}

impl ActionHandler for ScriptedActions {
    fn next_action(&mut self, plan: &Plan<'_>) -> Action {
        self.seen.push(plan.len());
        self.actions
            .pop_front()
            .unwrap_or(Action::Done(DoneChoice::Abort))
    }
}

/// Temporary directory with helpers for creating fixture files
///
/// Removed with its contents when dropped.
pub struct TestDir {
    dir: tempfile::TempDir,
}

impl TestDir {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temporary directory"),
        }
    }

    /// Create `name` holding `content` and return its path
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn create(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Path of `name` inside the directory
    #[must_use]
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Content of `name`, `None` if it does not exist
    #[must_use]
    pub fn read(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.path(name)).ok()
    }

    /// Sorted file names currently in the directory
    ///
    /// # Panics
    /// Panics if the directory cannot be listed.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("Failed to list test directory")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_canonicalize() {
        let fs = MemoryFs::with_files(["/a"]);
        fs.alias("/x/../a", "/a");

        assert_eq!(fs.canonicalize(Path::new("/a")).unwrap(), PathBuf::from("/a"));
        assert_eq!(fs.canonicalize(Path::new("/x/../a")).unwrap(), PathBuf::from("/a"));
        assert!(fs.canonicalize(Path::new("/b")).is_err());
    }

    #[test]
    fn test_memory_fs_rename_moves_content() {
        let fs = MemoryFs::with_files(["/a"]);
        fs.set_content("/a", "data");

        fs.rename(Path::new("/a"), Path::new("/b")).unwrap();

        assert!(!fs.contains("/a"));
        assert_eq!(fs.content("/b").as_deref(), Some("data"));
        assert_eq!(fs.renames(), [(PathBuf::from("/a"), PathBuf::from("/b"))]);
        assert!(fs.rename(Path::new("/a"), Path::new("/c")).is_err());
    }

    #[test]
    fn test_memory_fs_injected_failures() {
        let fs = MemoryFs::new();
        fs.add_file_at("/a", 7);
        assert_eq!(
            fs.modified(Path::new("/a")).unwrap(),
            UNIX_EPOCH + Duration::from_secs(7)
        );

        fs.fail_metadata("/a");
        fs.fail_rename_from("/a");
        assert!(fs.modified(Path::new("/a")).is_err());
        assert!(fs.rename(Path::new("/a"), Path::new("/b")).is_err());
        assert!(fs.renames().is_empty());
    }

    #[test]
    fn test_test_dir_files() {
        let dir = TestDir::new();
        let path = dir.create("one.txt", "1");

        assert!(path.exists());
        assert_eq!(dir.read("one.txt").as_deref(), Some("1"));
        assert_eq!(dir.read("two.txt"), None);
        assert_eq!(dir.names(), ["one.txt"]);
    }
}
