//! Flows module - Operations combining traversal with selection
//!
//! Provides:
//! - largest: Pick the highest-scoring file (by size or mtime)

pub mod largest;
