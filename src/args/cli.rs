use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_API_URL, DEFAULT_CLIENT_URL};
use super::parsers::parse_duration_arg;
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Launch-readiness verification: probes a deployed API and client once and exits non-zero if anything critical is broken."
)]
pub struct VerifyArgs {
    /// Base URL of the API under test
    #[arg(long = "api-url", env = "API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Base URL of the client application under test
    #[arg(long = "client-url", env = "CLIENT_URL", default_value = DEFAULT_CLIENT_URL)]
    pub client_url: String,

    /// Default request timeout for probes without their own bound (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "10s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Timeout for health and readiness calls (supports ms/s/m/h)
    #[arg(long = "health-timeout", default_value = "5s", value_parser = parse_duration_arg)]
    pub health_timeout: Duration,

    /// Timeout for client page loads (supports ms/s/m/h)
    #[arg(long = "page-timeout", default_value = "10s", value_parser = parse_duration_arg)]
    pub page_timeout: Duration,

    /// Timeout for the real-time channel handshake (supports ms/s/m/h)
    #[arg(long = "realtime-timeout", default_value = "3s", value_parser = parse_duration_arg)]
    pub realtime_timeout: Duration,

    /// Report format
    #[arg(long = "output-format", default_value = "text", ignore_case = true)]
    pub output_format: OutputFormat,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by LAUNCHCHECK_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./launchcheck.toml or ./launchcheck.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
