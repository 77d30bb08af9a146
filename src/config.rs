/// Process configuration derived from the startup flags, and the original
/// invocation it was derived from.
use std::ffi::OsString;

use serde::Serialize;

use crate::cli::Cli;

/// Authentication endpoint used when no `--auth-server` override is given.
pub const DEFAULT_AUTH_SERVER: &str = "wss://api.fastbuilder.pro:2053/";

/// Feature toggles established once at startup and read-only afterwards.
///
/// Built by [`crate::cli::parse_args`] and handed by value to the real entry
/// point. There is no way to mutate it after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessConfig {
    debug_mode: bool,
    disable_hash_check: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth_server_override: Option<String>,
    mute_world_chat: bool,
    no_py_rpc: bool,
    no_nbt: bool,
}

impl ProcessConfig {
    #[must_use]
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    #[must_use]
    pub fn disable_hash_check(&self) -> bool {
        self.disable_hash_check
    }

    /// Whether `-A` / `--auth-server` was given.
    #[must_use]
    pub fn auth_server_override_set(&self) -> bool {
        self.auth_server_override.is_some()
    }

    /// The `-A` / `--auth-server` value, or `""` when not given.
    #[must_use]
    pub fn auth_server_override_value(&self) -> &str {
        self.auth_server_override.as_deref().unwrap_or_default()
    }

    /// The authentication server the client should dial.
    #[must_use]
    pub fn auth_server(&self) -> &str {
        self.auth_server_override
            .as_deref()
            .unwrap_or(DEFAULT_AUTH_SERVER)
    }

    #[must_use]
    pub fn mute_world_chat(&self) -> bool {
        self.mute_world_chat
    }

    #[must_use]
    pub fn no_py_rpc(&self) -> bool {
        self.no_py_rpc
    }

    #[must_use]
    pub fn no_nbt(&self) -> bool {
        self.no_nbt
    }
}

impl From<Cli> for ProcessConfig {
    fn from(cli: Cli) -> Self {
        Self {
            debug_mode: cli.debug,
            disable_hash_check: cli.no_hash_check,
            auth_server_override: cli.auth_server,
            mute_world_chat: cli.no_world_chat,
            no_py_rpc: cli.no_pyrpc,
            no_nbt: cli.no_nbt,
        }
    }
}

/// The argument vector and environment block exactly as the process
/// received them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<OsString>,
    env: Vec<(OsString, OsString)>,
}

impl Invocation {
    /// Build an invocation from explicit parts. `args[0]` is the program name.
    #[must_use]
    pub fn new<A, E>(args: A, env: E) -> Self
    where
        A: IntoIterator,
        A::Item: Into<OsString>,
        E: IntoIterator<Item = (OsString, OsString)>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            env: env.into_iter().collect(),
        }
    }

    /// Capture the current process's arguments and environment.
    #[must_use]
    pub fn capture() -> Self {
        Self::new(std::env::args_os(), std::env::vars_os())
    }

    /// Full argument vector, including the program name.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Environment block in process order.
    #[must_use]
    pub fn env(&self) -> &[(OsString, OsString)] {
        &self.env
    }

    /// `argv[0]`, or `fastbuilder` when the vector is empty.
    #[must_use]
    pub fn program_name(&self) -> String {
        self.args.first().map_or_else(
            || "fastbuilder".to_owned(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}
