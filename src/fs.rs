//! Filesystem boundary
//!
//! The session never touches `std::fs` directly; it goes through the
//! `Filesystem` trait so tests can substitute an in-memory implementation
//! with fixed timestamps and injected failures.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Operations the rename session needs from a filesystem
pub trait Filesystem {
    /// Resolve `path` to an absolute form with all links and `..` removed.
    ///
    /// # Errors
    /// Returns an error if the path does not exist or cannot be accessed.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Move `from` to `to`.
    ///
    /// # Errors
    /// Returns an error if the underlying rename fails.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Last modification time of `path`.
    ///
    /// # Errors
    /// Returns an error if the metadata cannot be read.
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;

    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;
}

/// `Filesystem` backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

impl Filesystem for StdFilesystem {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as taken
        std::fs::symlink_metadata(path).is_ok()
    }
}

impl<T: Filesystem + ?Sized> Filesystem for &T {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        (**self).modified(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
