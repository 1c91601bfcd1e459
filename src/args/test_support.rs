use clap::Parser;

use crate::error::{AppError, AppResult};

use super::VerifyArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<VerifyArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    VerifyArgs::try_parse_from(args).map_err(AppError::from)
}
