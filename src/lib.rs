//! maxwalk - Directory walking with cancellable file notifications
//!
//! The library exposes the two building blocks the CLI is made of:
//! - [`walk::DirectoryWalker`]: depth-first traversal that announces a
//!   directory's files before its subdirectories and stops as soon as the
//!   callback answers [`walk::WalkControl::Cancel`]
//! - [`select::select_max`] / [`select::try_select_max`]: max-by-score
//!   selection with first-seen tie-breaking
//!
//! ```no_run
//! use maxwalk::select::select_max;
//! use maxwalk::walk::{DirectoryWalker, WalkControl};
//!
//! let mut files = Vec::new();
//! DirectoryWalker::new().walk(".", |found| {
//!     files.push(found.path().to_path_buf());
//!     WalkControl::Continue
//! });
//!
//! let largest = select_max(files, |path| {
//!     std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
//! });
//! ```

pub mod backends;
pub mod cli;
pub mod core;
pub mod flows;
pub mod select;
pub mod walk;
