use std::io::{Stdout, Write};
use std::sync::Mutex;

use serde::Serialize;

use crate::domain::{Outcome, OutcomeStatus, SessionResult, TargetConfig};
use crate::error::HarnessError;
use crate::session::Verdict;

use super::Reporter;

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ReportEvent<'a> {
    Start {
        api_url: &'a str,
        client_url: &'a str,
    },
    Probe {
        name: &'a str,
    },
    Outcome {
        status: OutcomeStatus,
        message: &'a str,
    },
    Summary {
        passed: usize,
        failed: usize,
        warnings: usize,
        total: usize,
        success_rate: u64,
        verdict: Verdict,
        outcomes: &'a [Outcome],
    },
}

/// Machine-readable report: one JSON object per line.
pub struct JsonReporter<W> {
    out: Mutex<W>,
}

impl JsonReporter<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn emit(&self, event: &ReportEvent<'_>) -> Result<(), HarnessError> {
        let mut out = self.out.lock().map_err(|err| HarnessError::ReporterPoisoned {
            detail: err.to_string(),
        })?;
        serde_json::to_writer(&mut *out, event)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> Reporter for JsonReporter<W> {
    fn session_started(&self, target: &TargetConfig) -> Result<(), HarnessError> {
        self.emit(&ReportEvent::Start {
            api_url: target.api_base(),
            client_url: target.client_base(),
        })
    }

    fn probe_started(&self, name: &str) -> Result<(), HarnessError> {
        self.emit(&ReportEvent::Probe { name })
    }

    fn outcome(&self, outcome: &Outcome) -> Result<(), HarnessError> {
        self.emit(&ReportEvent::Outcome {
            status: outcome.status(),
            message: outcome.message(),
        })
    }

    fn finish(&self, result: &SessionResult) -> Result<(), HarnessError> {
        self.emit(&ReportEvent::Summary {
            passed: result.passed(),
            failed: result.failed(),
            warnings: result.warnings(),
            total: result.total(),
            success_rate: result.success_rate_percent(),
            verdict: Verdict::of(result),
            outcomes: result.log(),
        })
    }
}
