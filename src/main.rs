mod entry;
mod logger;

use std::process::ExitCode;

use launchcheck::error::AppResult;

fn main() -> AppResult<ExitCode> {
    entry::run()
}
