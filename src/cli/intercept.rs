/// Two-stage startup: parse the startup flags, then hand control to the real
/// entry point.
use std::ffi::OsString;

use clap::Parser;

use super::args::Cli;
use super::usage::report;
use crate::config::{Invocation, ProcessConfig};
use crate::errors::InterceptError;

/// Parse a full argument vector (`args[0]` is the program name) into a
/// [`ProcessConfig`].
///
/// Options are processed left to right. `-h` / `--help` ends parsing at once.
///
/// # Errors
///
/// Returns `InterceptError::HelpRequested` for `-h` / `--help` and
/// `InterceptError::Usage` for an unknown option or a missing value.
pub fn parse_args<I, T>(args: I) -> Result<ProcessConfig, InterceptError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    Ok(ProcessConfig::from(cli))
}

/// Parse `invocation`'s arguments and run `entry` with the result.
///
/// Returns the process exit code: 0 after printing help, 1 after a usage
/// error, otherwise whatever `entry` returns. `entry` runs at most once and
/// receives the invocation untouched.
#[must_use]
pub fn intercept<F>(invocation: Invocation, entry: F) -> i32
where
    F: FnOnce(Invocation, ProcessConfig) -> i32,
{
    let parsed = parse_args(invocation.args());
    match parsed {
        Ok(config) => entry(invocation, config),
        Err(err) => {
            report(&err, &invocation.program_name());
            err.exit_code()
        }
    }
}
