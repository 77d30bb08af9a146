/// CLI argument definitions via clap derive.
use std::ffi::OsString;

use clap::{ArgAction, Parser};

/// fastbuilder — headless building client.
///
/// Only the startup flags are defined here. Positional arguments are accepted
/// anywhere on the command line and left for the client itself.
#[derive(Debug, Parser)]
#[command(
    name = "fastbuilder",
    about = "Headless FastBuilder client",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Run in debug mode.
    #[arg(long)]
    pub debug: bool,

    /// Use the specified authentication server, instead of the default one.
    #[arg(
        short = 'A',
        long = "auth-server",
        value_name = "URL",
        allow_hyphen_values = true
    )]
    pub auth_server: Option<String>,

    /// Disable the hash check.
    #[arg(long)]
    pub no_hash_check: bool,

    /// Ignore world chat on client side.
    #[arg(short = 'M', long = "no-world-chat")]
    pub no_world_chat: bool,

    #[arg(
        long = "no-pyrpc",
        help = "Disable the PyRpcPacket interaction, the client's commands will be prevented from execution by netease's rental server"
    )]
    pub no_pyrpc: bool,

    /// Disable NBT Construction feature.
    #[arg(long = "no-nbt")]
    pub no_nbt: bool,

    /// Show this help context.
    #[arg(short = 'h', long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Arguments passed through to the client untouched.
    #[arg(value_name = "ARGS")]
    pub positional: Vec<OsString>,
}
