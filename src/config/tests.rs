use std::time::Duration;

use clap::{CommandFactory, FromArgMatches};
use tempfile::tempdir;

use super::*;
use crate::args::{OutputFormat, VerifyArgs};
use crate::error::{AppError, AppResult, ConfigError};

fn parse_with_matches(raw: &[&str]) -> AppResult<(VerifyArgs, clap::ArgMatches)> {
    let matches = VerifyArgs::command().try_get_matches_from(raw)?;
    let args = VerifyArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

#[test]
fn load_toml_config() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("launchcheck.toml");
    std::fs::write(
        &path,
        r#"
api_url = "https://api.staging.test"
client_url = "https://app.staging.test"
timeout = "2s"
health_timeout = 1
output_format = "json"
"#,
    )?;

    let config = load_config_file(&path)?;
    if config.api_url.as_deref() != Some("https://api.staging.test") {
        return Err(AppError::config("Unexpected api_url"));
    }
    if config.output_format != Some(OutputFormat::Json) {
        return Err(AppError::config("Unexpected output_format"));
    }
    let health = config
        .health_timeout
        .as_ref()
        .ok_or_else(|| AppError::config("Missing health_timeout"))?
        .to_duration()
        .map_err(|err| AppError::config(format!("{}", err)))?;
    if health != Duration::from_secs(1) {
        return Err(AppError::config(format!("Unexpected health timeout {:?}", health)));
    }
    Ok(())
}

#[test]
fn load_json_config() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("launchcheck.json");
    std::fs::write(
        &path,
        r#"{"client_url": "http://127.0.0.1:3000", "page_timeout": "1500ms", "no_color": true}"#,
    )?;

    let config = load_config_file(&path)?;
    if config.client_url.as_deref() != Some("http://127.0.0.1:3000") {
        return Err(AppError::config("Unexpected client_url"));
    }
    if config.no_color != Some(true) {
        return Err(AppError::config("Expected no_color"));
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("launchcheck.yaml");
    std::fs::write(&path, "api_url: nope")?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected unsupported extension error")),
    }
}

#[test]
fn config_fills_values_not_given_on_cli() -> AppResult<()> {
    let (mut args, matches) = parse_with_matches(&[
        "launchcheck",
        "--client-url",
        "http://cli.client.test",
        "--timeout",
        "4s",
    ])?;
    let config: types::ConfigFile = toml::from_str(
        r#"
client_url = "http://config.client.test"
timeout = 9
realtime_timeout = "500ms"
"#,
    )
    .map_err(|err| AppError::config(format!("{}", err)))?;

    apply_config(&mut args, &matches, &config)?;

    if args.client_url != "http://cli.client.test" {
        return Err(AppError::config(format!(
            "CLI client_url was overridden: {}",
            args.client_url
        )));
    }
    if args.request_timeout != Duration::from_secs(4) {
        return Err(AppError::config("CLI timeout was overridden"));
    }
    if args.realtime_timeout != Duration::from_millis(500) {
        return Err(AppError::config("Config realtime_timeout not applied"));
    }
    Ok(())
}

#[test]
fn invalid_config_duration_names_field() -> AppResult<()> {
    let (mut args, matches) = parse_with_matches(&["launchcheck"])?;
    let config: types::ConfigFile = toml::from_str("page_timeout = \"soon\"")
        .map_err(|err| AppError::config(format!("{}", err)))?;

    match apply_config(&mut args, &matches, &config) {
        Err(AppError::Config(ConfigError::InvalidField { field, .. })) if field == "page_timeout" => {
            Ok(())
        }
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(()) => Err(AppError::config("Expected invalid duration error")),
    }
}
