//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::VerifyArgs;
pub use types::OutputFormat;

pub(crate) use defaults::DEFAULT_USER_AGENT;
pub use defaults::{DEFAULT_API_URL, DEFAULT_CLIENT_URL};
pub(crate) use parsers::parse_duration_arg;
