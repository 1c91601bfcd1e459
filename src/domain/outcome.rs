use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Pass,
    Fail,
    Warning,
}

impl OutcomeStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OutcomeStatus::Pass => "pass",
            OutcomeStatus::Fail => "fail",
            OutcomeStatus::Warning => "warning",
        }
    }
}

/// One classified result with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    status: OutcomeStatus,
    message: String,
}

impl Outcome {
    pub fn new(status: OutcomeStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> OutcomeStatus {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Counts and ordered log of every outcome recorded in a session.
///
/// The counters are only ever moved together with the log, so
/// `passed + failed + warnings == log.len()` holds for every value of this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    passed: usize,
    failed: usize,
    warnings: usize,
    log: Vec<Outcome>,
}

impl SessionResult {
    pub(crate) fn push(&mut self, outcome: Outcome) {
        match outcome.status() {
            OutcomeStatus::Pass => self.passed = self.passed.saturating_add(1),
            OutcomeStatus::Fail => self.failed = self.failed.saturating_add(1),
            OutcomeStatus::Warning => self.warnings = self.warnings.saturating_add(1),
        }
        self.log.push(outcome);
    }

    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    #[must_use]
    pub const fn warnings(&self) -> usize {
        self.warnings
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed
            .saturating_add(self.failed)
            .saturating_add(self.warnings)
    }

    #[must_use]
    pub fn log(&self) -> &[Outcome] {
        &self.log
    }

    /// Percentage of outcomes that passed, rounded half up. Warnings count
    /// toward the denominator. Zero when nothing was recorded.
    #[must_use]
    pub fn success_rate_percent(&self) -> u64 {
        let total = u128::try_from(self.total()).unwrap_or(u128::MAX);
        let passed = u128::try_from(self.passed).unwrap_or(u128::MAX);
        let rounded = passed
            .saturating_mul(200)
            .saturating_add(total)
            .checked_div(total.saturating_mul(2))
            .unwrap_or(0);
        u64::try_from(rounded).unwrap_or(u64::MAX)
    }
}
