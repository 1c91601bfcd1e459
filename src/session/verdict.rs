use std::process::ExitCode;

use serde::Serialize;

use crate::domain::SessionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Ready,
    NotReady,
}

impl Verdict {
    /// Ready iff nothing failed. Warnings never block.
    #[must_use]
    pub const fn of(result: &SessionResult) -> Self {
        if result.failed() == 0 {
            Verdict::Ready
        } else {
            Verdict::NotReady
        }
    }

    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Verdict::Ready)
    }

    #[must_use]
    pub const fn exit_status(self) -> u8 {
        match self {
            Verdict::Ready => 0,
            Verdict::NotReady => 1,
        }
    }
}

/// Process exit status for a finished session.
#[must_use]
pub fn decide(result: &SessionResult) -> ExitCode {
    ExitCode::from(Verdict::of(result).exit_status())
}
