mod app;
mod config;
mod harness;
mod http;
mod probe;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use harness::HarnessError;
pub use http::{HttpError, TransportError, TransportErrorKind};
pub use probe::ProbeError;
pub use validation::ValidationError;
