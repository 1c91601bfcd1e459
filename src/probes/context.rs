use std::sync::Arc;

use crate::domain::{OutcomeStatus, TargetConfig};
use crate::error::{HarnessError, ProbeError};
use crate::http::{Method, ProbeClient, ProbeResponse, RequestOptions, TimeoutPolicy};
use crate::report::Reporter;
use crate::session::Recorder;

/// What a probe gets to work with. Cheap to clone; clones share the recorder.
#[derive(Clone)]
pub struct ProbeContext {
    client: ProbeClient,
    target: Arc<TargetConfig>,
    timeouts: TimeoutPolicy,
    recorder: Recorder,
    reporter: Arc<dyn Reporter>,
}

impl ProbeContext {
    pub fn new(
        client: ProbeClient,
        target: Arc<TargetConfig>,
        timeouts: TimeoutPolicy,
        recorder: Recorder,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            client,
            target,
            timeouts,
            recorder,
            reporter,
        }
    }

    #[must_use]
    pub const fn client(&self) -> &ProbeClient {
        &self.client
    }

    #[must_use]
    pub fn target(&self) -> &TargetConfig {
        &self.target
    }

    #[must_use]
    pub const fn timeouts(&self) -> &TimeoutPolicy {
        &self.timeouts
    }

    /// Records an outcome and reports it in the same step.
    ///
    /// # Errors
    ///
    /// Returns an error when the recorder or reporter fails.
    pub fn record(
        &self,
        status: OutcomeStatus,
        message: impl Into<String>,
    ) -> Result<(), HarnessError> {
        let reporter = &self.reporter;
        self.recorder
            .record_with(status, message, |outcome| reporter.outcome(outcome))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error when the recorder or reporter fails.
    pub fn pass(&self, message: impl Into<String>) -> Result<(), ProbeError> {
        self.record(OutcomeStatus::Pass, message)
            .map_err(ProbeError::from)
    }

    /// # Errors
    ///
    /// Returns an error when the recorder or reporter fails.
    pub fn fail(&self, message: impl Into<String>) -> Result<(), ProbeError> {
        self.record(OutcomeStatus::Fail, message)
            .map_err(ProbeError::from)
    }

    /// # Errors
    ///
    /// Returns an error when the recorder or reporter fails.
    pub fn warn(&self, message: impl Into<String>) -> Result<(), ProbeError> {
        self.record(OutcomeStatus::Warning, message)
            .map_err(ProbeError::from)
    }

    /// Request against an API path. Transport failures become probe errors
    /// naming the endpoint.
    ///
    /// # Errors
    ///
    /// Returns a classified transport error when no response was received.
    pub async fn api(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<ProbeResponse, ProbeError> {
        let url = self.target.api_url(path);
        self.client
            .request(method.clone(), &url, options)
            .await
            .map_err(|err| ProbeError::transport(format!("{} {}", method, path), err))
    }

    /// # Errors
    ///
    /// See [`ProbeContext::api`].
    pub async fn api_get(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ProbeResponse, ProbeError> {
        self.api(Method::GET, path, options).await
    }

    /// # Errors
    ///
    /// See [`ProbeContext::api`].
    pub async fn api_post(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ProbeResponse, ProbeError> {
        self.api(Method::POST, path, options).await
    }
}
