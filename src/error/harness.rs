use thiserror::Error;

/// Failures of the harness itself. These are the only errors allowed to end a
/// session early.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Outcome recorder lock poisoned: {detail}")]
    RecorderPoisoned { detail: String },
    #[error("Failed to write report: {source}")]
    ReportWrite {
        #[from]
        source: std::io::Error,
    },
    #[error("Failed to serialize report: {source}")]
    ReportSerialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("Reporter output lock poisoned: {detail}")]
    ReporterPoisoned { detail: String },
}
