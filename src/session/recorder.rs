use std::sync::{Arc, Mutex};

use crate::domain::{Outcome, OutcomeStatus, SessionResult};
use crate::error::HarnessError;

/// Session-wide outcome store. Clones share the same state, so the fan-out
/// probes can record from concurrent futures.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    state: Arc<Mutex<SessionResult>>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns an error when the recorder lock is poisoned.
    pub fn record(
        &self,
        status: OutcomeStatus,
        message: impl Into<String>,
    ) -> Result<Outcome, HarnessError> {
        self.record_with(status, message, |_| Ok(()))
    }

    /// Appends an outcome and hands it to `notify` before releasing the lock,
    /// so observers see outcomes in log order.
    ///
    /// # Errors
    ///
    /// Returns an error when the lock is poisoned or `notify` fails.
    pub fn record_with<F>(
        &self,
        status: OutcomeStatus,
        message: impl Into<String>,
        notify: F,
    ) -> Result<Outcome, HarnessError>
    where
        F: FnOnce(&Outcome) -> Result<(), HarnessError>,
    {
        let outcome = Outcome::new(status, message);
        let mut state = self
            .state
            .lock()
            .map_err(|err| HarnessError::RecorderPoisoned {
                detail: err.to_string(),
            })?;
        state.push(outcome.clone());
        notify(&outcome)?;
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns an error when the recorder lock is poisoned.
    pub fn snapshot(&self) -> Result<SessionResult, HarnessError> {
        self.state
            .lock()
            .map(|state| state.clone())
            .map_err(|err| HarnessError::RecorderPoisoned {
                detail: err.to_string(),
            })
    }
}
