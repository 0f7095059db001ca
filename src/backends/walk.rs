//! Walk backend
//!
//! Drives the DirectoryWalker for the `walk` command: one file result per
//! visited file, in visiting order, followed by one error result per
//! directory that could not be listed.

use anyhow::{Context, Result};
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::model::{ItemError, ResultItem, ResultSet};
use crate::core::paths::display_path;
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::file_meta;
use crate::walk::{CollectingReporter, DirectoryWalker, WalkControl, WalkOptions, WalkOutcome};

/// When the `walk` command should cancel the traversal.
///
/// Each rule is checked against the root-relative path that is emitted for
/// the file, so directories above the root never match. The file that trips
/// a rule is still part of the output.
#[derive(Debug, Default)]
pub struct StopRule {
    /// Cancel when the path contains this substring
    pub contains: Option<String>,
    /// Cancel when the path matches this regex
    pub pattern: Option<Regex>,
    /// Cancel once this many files have been visited
    pub limit: Option<usize>,
}

impl StopRule {
    pub fn should_stop(&self, path: &str, visited: usize) -> bool {
        if let Some(needle) = &self.contains {
            if path.contains(needle.as_str()) {
                return true;
            }
        }
        if let Some(re) = &self.pattern {
            if re.is_match(path) {
                return true;
            }
        }
        matches!(self.limit, Some(limit) if visited >= limit)
    }
}

/// Results of one walk
#[derive(Debug)]
pub struct WalkReport {
    pub results: ResultSet,
    pub outcome: WalkOutcome,
}

/// Resolve the directory to walk: `scope` relative to root unless absolute
pub fn resolve_start(root: &Path, scope: Option<&Path>) -> PathBuf {
    match scope {
        Some(scope) if scope.is_absolute() => scope.to_path_buf(),
        Some(scope) => root.join(scope),
        None => root.to_path_buf(),
    }
}

/// Walk `root` (or `scope` under it), collecting visited files and failures
pub fn walk_files(
    root: &Path,
    scope: Option<&Path>,
    options: WalkOptions,
    rule: &StopRule,
) -> WalkReport {
    let start = resolve_start(root, scope);
    let mut walker = DirectoryWalker::with_reporter(CollectingReporter::new()).with_options(options);
    let mut results = ResultSet::new();

    let outcome = walker.walk(&start, |found| {
        let shown = display_path(found.path(), root);
        let stop = rule.should_stop(&shown, results.len() + 1);
        results.push(ResultItem::file(shown).with_meta(file_meta(found.path())));

        if stop {
            WalkControl::Cancel
        } else {
            WalkControl::Continue
        }
    });

    let visited = results.len();
    let errors = walker.into_reporter().into_errors();
    debug!(
        visited,
        failed_dirs = errors.len(),
        ?outcome,
        "walk finished"
    );

    results.extend(errors.into_iter().map(|error| {
        ResultItem::error(
            display_path(error.path(), root),
            ItemError::new(error.code(), error.to_string()),
        )
    }));

    WalkReport { results, outcome }
}

/// Run the walk command
pub fn run_walk(
    root: &Path,
    scope: Option<&Path>,
    options: WalkOptions,
    rule: &StopRule,
    config: RenderConfig,
) -> Result<()> {
    let report = walk_files(root, scope, options, rule);

    let renderer = Renderer::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    renderer
        .render_to(&report.results, &mut out)
        .and_then(|_| out.flush())
        .context("Failed to write walk results")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Kind;
    use std::fs;
    use tempfile::tempdir;

    fn write_file(path: &Path, len: usize) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, vec![b'.'; len]).unwrap();
    }

    fn sample_tree(root: &Path) {
        write_file(&root.join("a.txt"), 10);
        write_file(&root.join("b.txt"), 50);
        write_file(&root.join("sub/c.txt"), 5);
    }

    fn paths(report: &WalkReport) -> Vec<String> {
        report
            .results
            .items
            .iter()
            .filter(|item| item.kind == Kind::File)
            .filter_map(|item| item.path.clone())
            .collect()
    }

    #[test]
    fn test_walk_files_relative_paths_with_sizes() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());

        let report = walk_files(temp.path(), None, WalkOptions::default(), &StopRule::default());

        assert_eq!(report.outcome, WalkOutcome::Completed);
        assert_eq!(paths(&report), vec!["a.txt", "b.txt", "sub/c.txt"]);
        let sizes: Vec<_> = report.results.items.iter().map(|i| i.meta.size).collect();
        assert_eq!(sizes, vec![Some(10), Some(50), Some(5)]);
    }

    #[test]
    fn test_walk_files_scope() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());

        let report = walk_files(
            temp.path(),
            Some(Path::new("sub")),
            WalkOptions::default(),
            &StopRule::default(),
        );
        assert_eq!(paths(&report), vec!["sub/c.txt"]);
    }

    #[test]
    fn test_walk_files_stop_on_substring_keeps_trigger() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("a.txt"), 1);
        write_file(&temp.path().join("important.log"), 1);
        write_file(&temp.path().join("z.txt"), 1);
        write_file(&temp.path().join("sub/later.txt"), 1);

        let rule = StopRule {
            contains: Some("important".to_string()),
            ..StopRule::default()
        };
        let report = walk_files(temp.path(), None, WalkOptions::default(), &rule);

        assert_eq!(report.outcome, WalkOutcome::Cancelled);
        assert_eq!(paths(&report), vec!["a.txt", "important.log"]);
    }

    #[test]
    fn test_walk_files_stop_on_regex() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());

        let rule = StopRule {
            pattern: Some(Regex::new(r"b\.txt$").unwrap()),
            ..StopRule::default()
        };
        let report = walk_files(temp.path(), None, WalkOptions::default(), &rule);

        assert_eq!(report.outcome, WalkOutcome::Cancelled);
        assert_eq!(paths(&report), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_walk_files_stop_rule_ignores_root_name() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("important_project");
        sample_tree(&root);

        let rule = StopRule {
            contains: Some("important".to_string()),
            ..StopRule::default()
        };
        let report = walk_files(&root, None, WalkOptions::default(), &rule);

        assert_eq!(report.outcome, WalkOutcome::Completed);
        assert_eq!(paths(&report), vec!["a.txt", "b.txt", "sub/c.txt"]);
    }

    #[test]
    fn test_walk_files_regex_sees_relative_path() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());
        write_file(&temp.path().join("sub/d.txt"), 1);

        let rule = StopRule {
            pattern: Some(Regex::new(r"^sub/").unwrap()),
            ..StopRule::default()
        };
        let report = walk_files(temp.path(), None, WalkOptions::default(), &rule);

        assert_eq!(report.outcome, WalkOutcome::Cancelled);
        assert_eq!(paths(&report), vec!["a.txt", "b.txt", "sub/c.txt"]);
    }

    #[test]
    fn test_walk_files_limit() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());

        let rule = StopRule {
            limit: Some(1),
            ..StopRule::default()
        };
        let report = walk_files(temp.path(), None, WalkOptions::default(), &rule);

        assert_eq!(report.outcome, WalkOutcome::Cancelled);
        assert_eq!(paths(&report), vec!["a.txt"]);
    }

    #[test]
    fn test_walk_files_missing_scope_becomes_error_item() {
        let temp = tempdir().unwrap();

        let report = walk_files(
            temp.path(),
            Some(Path::new("missing")),
            WalkOptions::default(),
            &StopRule::default(),
        );

        assert_eq!(report.outcome, WalkOutcome::Completed);
        assert_eq!(report.results.len(), 1);
        let item = &report.results.items[0];
        assert_eq!(item.kind, Kind::Error);
        assert_eq!(item.path.as_deref(), Some("missing"));
        assert_eq!(item.errors[0].code, "READ_DIR_FAILED");
    }

    #[test]
    fn test_stop_rule_default_never_stops() {
        let rule = StopRule::default();
        assert!(!rule.should_stop("anything/important.log", 1_000));
    }

    #[test]
    fn test_resolve_start() {
        let root = Path::new("/project");
        assert_eq!(resolve_start(root, None), PathBuf::from("/project"));
        assert_eq!(
            resolve_start(root, Some(Path::new("docs"))),
            PathBuf::from("/project/docs")
        );
        assert_eq!(
            resolve_start(root, Some(Path::new("/elsewhere"))),
            PathBuf::from("/elsewhere")
        );
    }
}
