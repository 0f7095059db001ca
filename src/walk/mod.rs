//! Walk module - Recursive directory traversal with cancellable notifications
//!
//! This module provides:
//! - DirectoryWalker: depth-first, files-before-subdirectories traversal
//! - WalkControl: the callback's continue/cancel answer
//! - WalkReporter: the sink for directories that could not be listed

pub mod error;
pub mod report;
pub mod walker;

pub use error::WalkError;
pub use report::{from_fn, CollectingReporter, FnReporter, LogReporter, WalkReporter};
pub use walker::{DirectoryWalker, FoundFile, WalkControl, WalkOptions, WalkOutcome};
