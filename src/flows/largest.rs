//! Largest flow - Find the single highest-scoring file under a directory
//!
//! Collects every file recursively with walkdir, then scores each one
//! (size or modification time) and keeps the best. Unreadable directories
//! are logged and skipped, but a file that cannot be scored fails the
//! whole command.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::backends::walk::resolve_start;
use crate::core::model::{ResultItem, ResultSet};
use crate::core::paths::{display_path, is_hidden};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::{file_meta, get_file_size, get_mtime_ms};
use crate::select::try_select_max;
use crate::walk::WalkOptions;

/// What to rank files by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ScoreBy {
    /// File length in bytes
    #[default]
    Size,
    /// Last modification time
    Mtime,
}

impl ScoreBy {
    /// Score a file. Missing or unreadable files are an error.
    pub fn score(self, path: &Path) -> std::io::Result<u64> {
        match self {
            ScoreBy::Size => get_file_size(path),
            ScoreBy::Mtime => get_mtime_ms(path).map(|ms| ms.max(0) as u64),
        }
    }
}

/// Collect every file under `start`, recursively.
///
/// Entries walkdir cannot read are logged and skipped.
pub fn collect_files(start: &Path, options: WalkOptions) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(start).follow_links(options.follow_links);
    if options.sort_entries {
        walker = walker.sort_by_file_name();
    }

    let include_hidden = options.include_hidden;
    walker
        .into_iter()
        .filter_entry(move |entry| include_hidden || entry.depth() == 0 || !is_hidden(entry.path()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                let path = err.path().map(|p| p.display().to_string()).unwrap_or_default();
                warn!(path = %path, "skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file()
                || (entry.path_is_symlink()
                    && fs::metadata(entry.path()).map(|m| m.is_file()).unwrap_or(false))
        })
        .map(|entry| entry.into_path())
        .collect()
}

/// Find the highest-scoring file, or `None` when there are no files
pub fn find_largest(
    root: &Path,
    scope: Option<&Path>,
    by: ScoreBy,
    options: WalkOptions,
) -> Result<Option<ResultItem>> {
    let start = resolve_start(root, scope);
    let files = collect_files(&start, options);

    let best = try_select_max(files, |path| {
        by.score(path)
            .with_context(|| format!("Failed to score file: {}", path.display()))
    })?;

    Ok(best.map(|path| ResultItem::file(display_path(&path, root)).with_meta(file_meta(&path))))
}

/// Run the largest command
pub fn run_largest(
    root: &Path,
    scope: Option<&Path>,
    by: ScoreBy,
    options: WalkOptions,
    config: RenderConfig,
) -> Result<()> {
    let mut result_set = ResultSet::new();
    match find_largest(root, scope, by, options)? {
        Some(item) => result_set.push(item),
        None => info!("no files to analyze"),
    }

    let renderer = Renderer::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    renderer
        .render_to(&result_set, &mut out)
        .and_then(|_| out.flush())
        .context("Failed to write result")?;

    Ok(())
}
