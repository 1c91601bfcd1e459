//! Sequential probe execution and the final verdict.
mod recorder;
mod verdict;


use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{OutcomeStatus, SessionResult, TargetConfig};
use crate::error::{HarnessError, ProbeError};
use crate::http::{ProbeClient, TimeoutPolicy};
use crate::probes::{Probe, ProbeContext};
use crate::report::Reporter;

pub use recorder::Recorder;
pub use verdict::{Verdict, decide};

/// One run of every registered probe against one target.
pub struct Session {
    probes: Vec<Arc<dyn Probe>>,
    reporter: Arc<dyn Reporter>,
    client: ProbeClient,
    timeouts: TimeoutPolicy,
}

impl Session {
    pub fn new(
        probes: Vec<Arc<dyn Probe>>,
        reporter: Arc<dyn Reporter>,
        client: ProbeClient,
        timeouts: TimeoutPolicy,
    ) -> Self {
        Self {
            probes,
            reporter,
            client,
            timeouts,
        }
    }

    #[must_use]
    pub fn probe_names(&self) -> Vec<&'static str> {
        self.probes.iter().map(|probe| probe.name()).collect()
    }

    /// Runs every probe in order, one at a time.
    ///
    /// A probe that errors or panics becomes a single Fail outcome and the
    /// next probe still runs.
    ///
    /// # Errors
    ///
    /// Returns an error only when the recorder or reporter fails.
    pub async fn run(&self, target: TargetConfig) -> Result<SessionResult, HarnessError> {
        let target = Arc::new(target);
        let recorder = Recorder::new();

        info!(
            api = target.api_base(),
            client = target.client_base(),
            probes = self.probes.len(),
            "verification session started"
        );
        self.reporter.session_started(&target)?;

        for probe in &self.probes {
            let name = probe.name();
            self.reporter.probe_started(name)?;

            let ctx = ProbeContext::new(
                self.client.clone(),
                Arc::clone(&target),
                self.timeouts,
                recorder.clone(),
                Arc::clone(&self.reporter),
            );
            let task_ctx = ctx.clone();
            let task_probe = Arc::clone(probe);
            let joined = tokio::spawn(async move { task_probe.run(&task_ctx).await }).await;

            let failure = match joined {
                Ok(Ok(())) => None,
                Ok(Err(ProbeError::Harness(err))) => return Err(err),
                Ok(Err(err)) => Some(err),
                Err(err) => Some(ProbeError::Internal {
                    detail: join_error_detail(err),
                }),
            };
            if let Some(err) = failure {
                debug!(probe = name, error = %err, "probe aborted");
                ctx.record(OutcomeStatus::Fail, format!("{} check failed: {}", name, err))?;
            }
        }

        let result = recorder.snapshot()?;
        self.reporter.finish(&result)?;
        info!(
            passed = result.passed(),
            failed = result.failed(),
            warnings = result.warnings(),
            ready = Verdict::of(&result).is_ready(),
            "verification session finished"
        );
        Ok(result)
    }
}

fn join_error_detail(err: tokio::task::JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }
    let payload = err.into_panic();
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_owned();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "panic".to_owned()
}
