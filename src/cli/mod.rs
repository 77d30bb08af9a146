/// CLI layer: startup flag definitions, parsing and usage output.
pub mod args;
pub mod intercept;
pub mod usage;

pub use args::Cli;
pub use intercept::{intercept, parse_args};
pub use usage::usage_text;
