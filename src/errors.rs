/// Errors from the startup flag interceptor.
use thiserror::Error;

/// Outcomes of argument parsing that stop the client from starting.
#[derive(Debug, Error)]
pub enum InterceptError {
    /// `-h` / `--help` was given. Not a failure, but startup ends here.
    #[error("Help requested")]
    HelpRequested,

    /// An unrecognized option, a missing option value, or a value given to a
    /// plain flag.
    #[error("{message}")]
    Usage {
        /// Human-readable description of the offending argument.
        message: String,
    },
}

impl InterceptError {
    /// Return the process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::HelpRequested => 0,
            Self::Usage { .. } => 1,
        }
    }
}

impl From<clap::Error> for InterceptError {
    fn from(err: clap::Error) -> Self {
        use clap::error::ErrorKind;

        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Self::HelpRequested
            }
            _ => Self::Usage {
                message: first_line(&err.to_string()),
            },
        }
    }
}

/// clap renders a multi-line report with usage and tips; keep only the
/// diagnostic itself.
fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_owned()
}
