use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::VerifyArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments.
///
/// Values given on the command line or through the environment win over the
/// config file; the file wins over built-in defaults.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut VerifyArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "api_url")
        && let Some(url) = config.api_url.as_ref()
    {
        args.api_url.clone_from(url);
    }

    if !is_explicit(matches, "client_url")
        && let Some(url) = config.client_url.as_ref()
    {
        args.client_url.clone_from(url);
    }

    if !is_explicit(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = config_duration(timeout, "timeout")?;
    }

    if !is_explicit(matches, "health_timeout")
        && let Some(timeout) = config.health_timeout.as_ref()
    {
        args.health_timeout = config_duration(timeout, "health_timeout")?;
    }

    if !is_explicit(matches, "page_timeout")
        && let Some(timeout) = config.page_timeout.as_ref()
    {
        args.page_timeout = config_duration(timeout, "page_timeout")?;
    }

    if !is_explicit(matches, "realtime_timeout")
        && let Some(timeout) = config.realtime_timeout.as_ref()
    {
        args.realtime_timeout = config_duration(timeout, "realtime_timeout")?;
    }

    if !is_explicit(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_explicit(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn config_duration(
    value: &DurationValue,
    field: &'static str,
) -> AppResult<std::time::Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidField { field, source: err }))
}
