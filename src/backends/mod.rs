//! Backends module - File operations behind each command
//!
//! Provides:
//! - walk: Directory walking with stop rules

pub mod walk;
