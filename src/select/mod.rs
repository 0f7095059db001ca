//! Selection module - Picks the best item out of a sequence
//!
//! This module provides:
//! - Max-by-score selection with first-seen tie-breaking
//! - A fallible variant that stops at the first scoring failure

pub mod max;

pub use max::{select_max, try_select_max};
