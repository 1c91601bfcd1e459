use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, FromArgMatches};

use launchcheck::args::{OutputFormat, VerifyArgs};
use launchcheck::config::{apply_config, load_config};
use launchcheck::domain::{SessionResult, TargetConfig};
use launchcheck::error::AppResult;
use launchcheck::http::{ProbeClient, TimeoutPolicy};
use launchcheck::probes::launch_probes;
use launchcheck::report::{ConsoleReporter, JsonReporter, Reporter};
use launchcheck::session::{Session, decide};

pub(crate) fn run() -> AppResult<ExitCode> {
    let matches = VerifyArgs::command().get_matches();
    let mut args = VerifyArgs::from_arg_matches(&matches)?;
    // Config decides verbosity and color, so it is resolved before logging exists.
    let config = load_config(args.config.as_deref())?;
    if let Some(config) = config.as_ref() {
        apply_config(&mut args, &matches, config)?;
    }

    crate::logger::init_logging(args.verbose, args.no_color);
    tracing::debug!(
        config_file = config.is_some(),
        api = %args.api_url,
        client = %args.client_url,
        "configuration resolved"
    );

    let target = TargetConfig::new(&args.api_url, &args.client_url)?;
    let timeouts = TimeoutPolicy {
        ambient: args.request_timeout,
        health: args.health_timeout,
        page: args.page_timeout,
        realtime: args.realtime_timeout,
    };
    let client = ProbeClient::new(timeouts.ambient)?;
    let reporter: Arc<dyn Reporter> = match args.output_format {
        OutputFormat::Text => Arc::new(ConsoleReporter::stdout(args.no_color)),
        OutputFormat::Json => Arc::new(JsonReporter::stdout()),
    };
    let session = Session::new(launch_probes(), reporter, client, timeouts);
    tracing::debug!(probes = ?session.probe_names(), "session assembled");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result: SessionResult = runtime.block_on(session.run(target))?;

    Ok(decide(&result))
}
