//! Diagnostic logging to stderr.
//!
//! Quiet by default (`warn`). `--debug` raises the level to `debug`, and
//! `RUST_LOG` overrides both:
//! ```bash
//! RUST_LOG=fastbuilder_launch=trace fastbuilder --no-nbt
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::ProcessConfig;

/// Level used when `RUST_LOG` is unset.
#[must_use]
pub fn default_level(config: &ProcessConfig) -> &'static str {
    if config.debug_mode() { "debug" } else { "warn" }
}

/// Install the global subscriber. Only the first call takes effect.
pub fn init(config: &ProcessConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(config)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
