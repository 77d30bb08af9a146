/// The binary's real entry point: reports the startup state it was handed.
///
/// The full client (auth, session, building) lives outside this crate; this
/// entry point stands in for it so the interceptor can be driven end to end.
use anyhow::Context;
use serde::Serialize;

use crate::config::{Invocation, ProcessConfig};

/// JSON report written to stdout on a successful start.
#[derive(Debug, Serialize)]
pub struct StartupReport<'a> {
    /// `argv[0]`.
    pub program: String,
    /// Every argument after `argv[0]`, unmodified (lossy UTF-8).
    pub args: Vec<String>,
    pub config: &'a ProcessConfig,
    /// Effective authentication server.
    pub auth_server: &'a str,
}

impl<'a> StartupReport<'a> {
    #[must_use]
    pub fn new(invocation: &Invocation, config: &'a ProcessConfig) -> Self {
        Self {
            program: invocation.program_name(),
            args: invocation
                .args()
                .iter()
                .skip(1)
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
            config,
            auth_server: config.auth_server(),
        }
    }
}

/// Run the client with the parsed configuration. Returns the exit code.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn run(invocation: Invocation, config: ProcessConfig) -> i32 {
    tracing::debug!(
        ?config,
        args = invocation.args().len(),
        env = invocation.env().len(),
        "entering client"
    );
    if config.disable_hash_check() {
        tracing::warn!("hash check disabled");
    }

    match print_report(&StartupReport::new(&invocation, &config)) {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!("{err:#}");
            1
        }
    }
}

fn print_report(report: &StartupReport<'_>) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(report).context("serializing startup report")?;
    println!("{s}");
    Ok(())
}
