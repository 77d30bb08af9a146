/// Usage text rendering and startup error reporting.
use std::io::Write;

use clap::CommandFactory;

use super::args::Cli;
use crate::errors::InterceptError;

/// Render the fixed usage message for `program`.
///
/// The same text is shown for `--help` and for usage errors.
#[must_use]
pub fn usage_text(program: &str) -> String {
    let mut cmd = Cli::command().bin_name(program.to_owned());
    cmd.render_help().to_string()
}

/// Print the usage message to stdout and, for real errors, a one-line
/// diagnostic to stderr.
pub fn report(err: &InterceptError, program: &str) {
    if let InterceptError::Usage { message } = err {
        let _ = writeln!(std::io::stderr().lock(), "Error: {message}");
    }
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let _ = writeln!(out, "{}", usage_text(program).trim_end());
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_every_option() {
        let text = usage_text("fastbuilder");
        for needle in [
            "--debug",
            "-A, --auth-server <URL>",
            "--no-hash-check",
            "-M, --no-world-chat",
            "--no-pyrpc",
            "--no-nbt",
            "-h, --help",
        ] {
            assert!(text.contains(needle), "usage is missing {needle}:\n{text}");
        }
    }

    #[test]
    fn test_usage_has_descriptions() {
        let text = usage_text("fastbuilder");
        assert!(text.contains("Run in debug mode"));
        assert!(text.contains("Disable the hash check"));
        assert!(text.contains("Ignore world chat on client side"));
        assert!(text.contains("Disable the PyRpcPacket interaction"));
        assert!(text.contains("Disable NBT Construction feature"));
        assert!(text.contains("Show this help context"));
    }

    #[test]
    fn test_usage_names_program() {
        let text = usage_text("./build/fastbuilder");
        assert!(text.contains("Usage: ./build/fastbuilder"));
    }

    #[test]
    fn test_usage_is_stable() {
        assert_eq!(usage_text("fastbuilder"), usage_text("fastbuilder"));
    }
}
