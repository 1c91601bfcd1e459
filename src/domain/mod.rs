//! Value types shared by the session, probes, and reporters.
mod outcome;
mod target;

pub use outcome::{Outcome, OutcomeStatus, SessionResult};
pub use target::TargetConfig;
