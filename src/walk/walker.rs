//! Directory walker
//!
//! Visits a tree depth-first. Within each directory every file is announced
//! before any subdirectory is entered. The callback answers each file with a
//! `WalkControl`; a single `Cancel` ends the whole walk, not just the current
//! directory.

use std::fs::{self, FileType};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::WalkError;
use super::report::{LogReporter, WalkReporter};
use crate::core::paths::is_hidden;

/// The callback's answer for a found file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    Continue,
    Cancel,
}

/// How a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// Every reachable file was visited
    Completed,
    /// A callback asked to stop
    Cancelled,
}

/// Notification for a single file, built just before the callback runs
#[derive(Debug)]
pub struct FoundFile {
    path: PathBuf,
}

impl FoundFile {
    /// Path as produced by the listing: the walked directory joined with the
    /// entry name. Relative roots give relative paths.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }
}

/// Walker configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Sort each directory listing by file name instead of keeping the
    /// filesystem's order
    pub sort_entries: bool,
    /// Include dotfiles and dot-directories
    pub include_hidden: bool,
    /// Descend into symlinked directories. Symlinks to files are always
    /// reported as files.
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            sort_entries: true,
            include_hidden: true,
            follow_links: false,
        }
    }
}

/// One directory's entries, split by kind
#[derive(Debug, Default)]
struct Listing {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

enum EntryKind {
    File,
    Dir,
    Skip,
}

/// Recursive file walker with cancellable per-file notifications
#[derive(Debug)]
pub struct DirectoryWalker<R = LogReporter> {
    options: WalkOptions,
    reporter: R,
}

impl DirectoryWalker<LogReporter> {
    /// Create a walker that logs unreadable directories as warnings
    pub fn new() -> Self {
        Self::with_reporter(LogReporter)
    }
}

impl Default for DirectoryWalker<LogReporter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: WalkReporter> DirectoryWalker<R> {
    /// Create a walker with a custom failure reporter
    pub fn with_reporter(reporter: R) -> Self {
        Self {
            options: WalkOptions::default(),
            reporter,
        }
    }

    /// Set walk options
    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Walk `root`, calling `on_file` for every file found.
    ///
    /// Directories that cannot be listed are reported and skipped; they never
    /// make the walk fail. Each call starts from scratch.
    pub fn walk<F>(&mut self, root: impl AsRef<Path>, mut on_file: F) -> WalkOutcome
    where
        F: FnMut(&FoundFile) -> WalkControl,
    {
        let root = root.as_ref();
        debug!(root = %root.display(), "walk started");

        match self.walk_dir(root, &mut on_file) {
            WalkControl::Continue => WalkOutcome::Completed,
            WalkControl::Cancel => WalkOutcome::Cancelled,
        }
    }

    fn walk_dir<F>(&mut self, dir: &Path, on_file: &mut F) -> WalkControl
    where
        F: FnMut(&FoundFile) -> WalkControl,
    {
        let listing = match self.list_dir(dir) {
            Ok(listing) => listing,
            Err(error) => {
                self.reporter.report(error);
                return WalkControl::Continue;
            }
        };

        for path in listing.files {
            let found = FoundFile { path };
            if on_file(&found) == WalkControl::Cancel {
                info!(path = %found.path().display(), "walk cancelled by callback");
                return WalkControl::Cancel;
            }
        }

        for subdir in listing.dirs {
            if self.walk_dir(&subdir, on_file) == WalkControl::Cancel {
                return WalkControl::Cancel;
            }
        }

        WalkControl::Continue
    }

    /// Read one directory level. Any failure abandons the whole directory.
    fn list_dir(&self, dir: &Path) -> Result<Listing, WalkError> {
        let entries = fs::read_dir(dir).map_err(|source| WalkError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut listing = Listing::default();
        for entry in entries {
            let entry = entry.map_err(|source| WalkError::ReadEntry {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if !self.options.include_hidden && is_hidden(&path) {
                continue;
            }

            let file_type = entry.file_type().map_err(|source| WalkError::ReadEntry {
                path: dir.to_path_buf(),
                source,
            })?;

            match self.classify(file_type, &path) {
                EntryKind::File => listing.files.push(path),
                EntryKind::Dir => listing.dirs.push(path),
                EntryKind::Skip => {}
            }
        }

        if self.options.sort_entries {
            listing.files.sort();
            listing.dirs.sort();
        }

        Ok(listing)
    }

    fn classify(&self, file_type: FileType, path: &Path) -> EntryKind {
        if file_type.is_file() {
            return EntryKind::File;
        }
        if file_type.is_dir() {
            return EntryKind::Dir;
        }
        if !file_type.is_symlink() {
            // sockets, fifos, devices
            return EntryKind::Skip;
        }

        match fs::metadata(path) {
            Ok(target) if target.is_file() => EntryKind::File,
            Ok(target) if target.is_dir() && self.options.follow_links => EntryKind::Dir,
            Ok(_) => EntryKind::Skip,
            Err(err) => {
                debug!(path = %path.display(), "skipping broken symlink: {}", err);
                EntryKind::Skip
            }
        }
    }
}
