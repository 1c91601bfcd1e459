//! Rendering of outcomes as they happen and of the end-of-run summary.
mod console;
mod json;
mod progress;
mod summary;


use crate::domain::{Outcome, SessionResult, TargetConfig};
use crate::error::HarnessError;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use progress::{NoProgress, ProgressIndicator, TerminalProgress};
pub use summary::{SummaryLine, Tone, glyph, summary_lines};

/// Consumer of the outcome stream. Never mutates what it is shown.
///
/// Every method may fail only for reasons of the harness itself (broken
/// output), which ends the session.
pub trait Reporter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when the report output cannot be written.
    fn session_started(&self, target: &TargetConfig) -> Result<(), HarnessError>;

    /// # Errors
    ///
    /// Returns an error when the report output cannot be written.
    fn probe_started(&self, name: &str) -> Result<(), HarnessError>;

    /// # Errors
    ///
    /// Returns an error when the report output cannot be written.
    fn outcome(&self, outcome: &Outcome) -> Result<(), HarnessError>;

    /// # Errors
    ///
    /// Returns an error when the report output cannot be written.
    fn finish(&self, result: &SessionResult) -> Result<(), HarnessError>;
}
