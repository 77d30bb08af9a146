#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::struct_excessive_bools)]
//! fastbuilder-launch — startup flag interception and bounded command
//! rendering for the headless fastbuilder client.

pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod launch;
pub mod logging;

pub use cli::{intercept, parse_args};
pub use command::{CommandBuffer, format_setblock};
pub use config::{Invocation, ProcessConfig};
pub use errors::InterceptError;
