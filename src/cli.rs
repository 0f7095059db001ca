//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;

use crate::backends::walk::StopRule;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::largest::ScoreBy;
use crate::walk::WalkOptions;

/// maxwalk - walk directory trees and pick out the largest file.
#[derive(Parser, Debug)]
#[command(name = "maxwalk")]
#[command(
    author,
    version,
    about,
    long_about = r#"maxwalk walks a directory tree depth-first, announcing every file in a
directory before descending into its subdirectories, and can stop the walk
as soon as a file matches a rule.

Each command prints a ResultSet in the selected format (default: jsonl).

Output formats:
- jsonl: one JSON object per line (best for piping into tools)
- json: a single JSON array
- md: human-friendly Markdown
- raw: bare file paths, one per line

Examples:
    maxwalk walk
    maxwalk walk --stop-on important
    maxwalk walk --scope src --limit 20 --format raw
    maxwalk largest
    maxwalk largest --by mtime --scope logs
"#
)]
pub struct Cli {
    /// Root directory for all operations.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        env = "MAXWALK_ROOT",
        long_help = "Root directory for all operations (defaults to the current directory).\n\n\
All paths emitted in results are relative to this root, and --scope is\n\
interpreted relative to it."
    )]
    pub root: PathBuf,

    /// Output format (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        value_enum,
        ignore_case = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        env = "MAXWALK_FORMAT"
    )]
    pub format: OutputFormat,

    /// Disable colored log output.
    #[arg(
        long,
        global = true,
        long_help = "Disable ANSI colors in diagnostics written to stderr. This is useful when\n\
redirecting stderr to a file."
    )]
    pub no_color: bool,

    /// Quiet mode (warnings and errors only).
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        long_help = "Only log warnings and errors to stderr. Unreadable directories are still\n\
reported. Results on stdout are unaffected."
    )]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug diagnostics on stderr, including skipped symlinks and a\n\
summary at the end of each walk."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk a directory tree and list every file found.
    #[command(
        long_about = "Walk ROOT (or --scope) depth-first. In each directory all files are\n\
emitted before any subdirectory is entered. Directories that cannot be read are\n\
logged as warnings, emitted as error items at the end, and skipped.\n\n\
A stop rule cancels the whole walk; the file that triggered it is still emitted.\n\n\
Examples:\n\
  maxwalk walk\n\
  maxwalk walk --stop-on important\n\
  maxwalk walk --stop-on-match '\\.log$' --limit 100\n"
    )]
    Walk {
        /// Limit the walk to a subdirectory under ROOT.
        #[arg(long, value_name = "PATH")]
        scope: Option<PathBuf>,

        /// Cancel the walk when a file path contains this text.
        #[arg(long, value_name = "TEXT")]
        stop_on: Option<String>,

        /// Cancel the walk when a file path matches this regex.
        #[arg(long, value_name = "REGEX")]
        stop_on_match: Option<String>,

        /// Cancel the walk after N files.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Find the largest (or most recently modified) file.
    #[command(
        long_about = "Collect every file under ROOT (or --scope) and emit the one with the\n\
highest score. Ties keep the file found first. Emits nothing when there are no files.\n\n\
Examples:\n\
  maxwalk largest\n\
  maxwalk largest --by mtime --scope logs\n"
    )]
    Largest {
        /// Limit the search to a subdirectory under ROOT.
        #[arg(long, value_name = "PATH")]
        scope: Option<PathBuf>,

        /// Score files by size or modification time.
        #[arg(long, value_enum, default_value = "size", value_name = "KEY")]
        by: ScoreBy,

        #[command(flatten)]
        walk: WalkArgs,
    },
}

/// Traversal flags shared by all commands
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct WalkArgs {
    /// Skip hidden files and directories (dotfiles).
    #[arg(long)]
    pub skip_hidden: bool,

    /// Descend into symlinked directories.
    #[arg(long)]
    pub follow_links: bool,

    /// Keep the filesystem's listing order instead of sorting by name.
    #[arg(long)]
    pub unsorted: bool,
}

impl From<WalkArgs> for WalkOptions {
    fn from(args: WalkArgs) -> Self {
        WalkOptions {
            sort_entries: !args.unsorted,
            include_hidden: !args.skip_hidden,
            follow_links: args.follow_links,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let render_config = RenderConfig {
        format: cli.format,
        pretty: cli.pretty,
    };

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        Commands::Walk {
            scope,
            stop_on,
            stop_on_match,
            limit,
            walk,
        } => {
            let pattern = stop_on_match
                .as_deref()
                .map(Regex::new)
                .transpose()
                .context("Invalid --stop-on-match regex")?;
            let rule = StopRule {
                contains: stop_on,
                pattern,
                limit,
            };
            crate::backends::walk::run_walk(
                &root,
                scope.as_deref(),
                walk.into(),
                &rule,
                render_config,
            )
        }

        Commands::Largest { scope, by, walk } => {
            crate::flows::largest::run_largest(
                &root,
                scope.as_deref(),
                by,
                walk.into(),
                render_config,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_walk_flags() {
        let cli = Cli::try_parse_from([
            "maxwalk",
            "walk",
            "--stop-on",
            "important",
            "--limit",
            "3",
            "--skip-hidden",
            "--unsorted",
        ])
        .unwrap();

        match cli.command {
            Commands::Walk {
                stop_on,
                limit,
                walk,
                ..
            } => {
                assert_eq!(stop_on.as_deref(), Some("important"));
                assert_eq!(limit, Some(3));
                let options: WalkOptions = walk.into();
                assert!(!options.sort_entries);
                assert!(!options.include_hidden);
                assert!(!options.follow_links);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_largest_rejects_unknown_key() {
        let result = Cli::try_parse_from(["maxwalk", "largest", "--by", "color"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_largest_key() {
        let cli = Cli::try_parse_from(["maxwalk", "largest", "--by", "mtime"]).unwrap();
        assert!(matches!(cli.command, Commands::Largest { by: ScoreBy::Mtime, .. }));

        let cli = Cli::try_parse_from(["maxwalk", "largest"]).unwrap();
        assert!(matches!(cli.command, Commands::Largest { by: ScoreBy::Size, .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result = Cli::try_parse_from(["maxwalk", "--format", "yaml", "walk"]);
        assert!(result.is_err());
        let cli = Cli::try_parse_from(["maxwalk", "--format", "JSON", "walk"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["maxwalk", "largest", "--format", "md", "--root", "/tmp"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Markdown);
        assert_eq!(cli.root, PathBuf::from("/tmp"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["maxwalk", "-q", "-v", "walk"]);
        assert!(result.is_err());
    }
}
