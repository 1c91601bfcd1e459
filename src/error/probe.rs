use thiserror::Error;

use super::{HarnessError, TransportError, TransportErrorKind};

/// Everything that can stop a probe part-way.
///
/// The session turns each of these into a single Fail outcome, except
/// `Harness`, which aborts the run.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request to {endpoint} timed out ({detail})")]
    TransportTimeout { endpoint: String, detail: String },
    #[error("connection refused by {endpoint} ({detail})")]
    ConnectionRefused { endpoint: String, detail: String },
    #[error("request to {endpoint} failed ({detail})")]
    Transport { endpoint: String, detail: String },
    #[error("{endpoint} returned unexpected status {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },
    #[error("{endpoint} returned a malformed response: {detail}")]
    MalformedResponse { endpoint: String, detail: String },
    #[error("probe crashed: {detail}")]
    Internal { detail: String },
    #[error(transparent)]
    Harness(#[from] HarnessError),
}

impl ProbeError {
    pub fn transport(endpoint: impl Into<String>, error: TransportError) -> Self {
        let endpoint = endpoint.into();
        let detail = error.detail().to_owned();
        match error.kind() {
            TransportErrorKind::Timeout => ProbeError::TransportTimeout { endpoint, detail },
            TransportErrorKind::ConnectionRefused => {
                ProbeError::ConnectionRefused { endpoint, detail }
            }
            TransportErrorKind::Other => ProbeError::Transport { endpoint, detail },
        }
    }

    pub fn unexpected_status(endpoint: impl Into<String>, status: u16) -> Self {
        ProbeError::UnexpectedStatus {
            endpoint: endpoint.into(),
            status,
        }
    }

    pub fn malformed(endpoint: impl Into<String>, detail: impl ToString) -> Self {
        ProbeError::MalformedResponse {
            endpoint: endpoint.into(),
            detail: detail.to_string(),
        }
    }
}
