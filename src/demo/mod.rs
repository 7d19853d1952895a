//! The `funcseq` command line demonstrations.
//!
//! Each subcommand exercises one part of the library and renders its result
//! as plain text lines. [`run`] is a pure function of the parsed [`Command`]
//! and the [`DemoConfig`], so every demonstration can be tested without
//! spawning the binary.

mod cli;
mod config;
mod run;

pub use cli::{Cli, Command};
pub use config::{
    ConfigError, DEFAULT_LOG_FILTER, DEFAULT_RECURSION_BOUND, DEFAULT_WORKERS, DemoConfig,
    MAX_WORKERS,
};
pub use run::run;
