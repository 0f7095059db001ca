//! Reporting sinks for traversal failures
//!
//! The walker never prints. Every directory it has to give up on is passed
//! to a `WalkReporter`, which decides where the failure goes.

use tracing::warn;

use super::error::WalkError;

/// Receives directories that could not be listed
pub trait WalkReporter {
    fn report(&mut self, error: WalkError);
}

impl<R: WalkReporter + ?Sized> WalkReporter for &mut R {
    fn report(&mut self, error: WalkError) {
        (**self).report(error);
    }
}

/// Keeps failures in memory without logging
impl WalkReporter for Vec<WalkError> {
    fn report(&mut self, error: WalkError) {
        self.push(error);
    }
}

/// Reporter backed by a closure, built with [`from_fn`]
pub struct FnReporter<F>(F);

/// Wrap a closure as a reporter
pub fn from_fn<F: FnMut(WalkError)>(f: F) -> FnReporter<F> {
    FnReporter(f)
}

impl<F: FnMut(WalkError)> WalkReporter for FnReporter<F> {
    fn report(&mut self, error: WalkError) {
        (self.0)(error);
    }
}

/// Logs each failure as a warning and drops it
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl WalkReporter for LogReporter {
    fn report(&mut self, error: WalkError) {
        log_failure(&error);
    }
}

/// Logs each failure as a warning and keeps it for later output
#[derive(Debug, Default)]
pub struct CollectingReporter {
    errors: Vec<WalkError>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[WalkError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<WalkError> {
        self.errors
    }
}

impl WalkReporter for CollectingReporter {
    fn report(&mut self, error: WalkError) {
        log_failure(&error);
        self.errors.push(error);
    }
}

fn log_failure(error: &WalkError) {
    warn!(code = error.code(), "skipping subtree: {}", error);
}
