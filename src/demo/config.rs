//! Demo configuration loaded from the environment.
//!
//! # Environment Variables
//!
//! - `FUNCSEQ_RECURSION_BOUND`: depth used by `count` (default: 20000000)
//! - `FUNCSEQ_WORKERS`: task count used by `concurrent`, 1 to 256 (default: 10)
//! - `FUNCSEQ_LOG`: tracing filter directive (default: "info")
//!
//! All variables are optional. A `.env` file in the working directory is
//! loaded first when present.

use std::fmt::Display;
use std::str::FromStr;

/// Default recursion depth for the `count` demo.
pub const DEFAULT_RECURSION_BOUND: u64 = 20_000_000;

/// Default number of concurrent tasks for the `concurrent` demo.
pub const DEFAULT_WORKERS: usize = 10;

/// Upper bound on concurrent tasks; each task runs on its own OS thread.
pub const MAX_WORKERS: usize = 256;

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Settings shared by the demo subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Depth of the trampolined recursion demo.
    pub recursion_bound: u64,
    /// Number of tasks in the concurrency demo.
    pub workers: usize,
    /// Filter directive for `tracing-subscriber`.
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            recursion_bound: DEFAULT_RECURSION_BOUND,
            workers: DEFAULT_WORKERS,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl DemoConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to a value
    /// that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a value does not parse, or if
    /// `FUNCSEQ_WORKERS` is outside `1..=MAX_WORKERS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcseq::demo::DemoConfig;
    ///
    /// let config = DemoConfig::from_lookup(|key| match key {
    ///     "FUNCSEQ_WORKERS" => Some("4".to_owned()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.workers, 4);
    /// assert_eq!(config.recursion_bound, 20_000_000);
    /// ```
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let recursion_bound =
            parse_or(&lookup, "FUNCSEQ_RECURSION_BOUND", DEFAULT_RECURSION_BOUND)?;
        let workers = parse_or(&lookup, "FUNCSEQ_WORKERS", DEFAULT_WORKERS)?;
        let workers = check_workers(workers).map_err(|message| ConfigError::InvalidValue {
            key: "FUNCSEQ_WORKERS".to_owned(),
            message,
        })?;
        let log_filter = lookup("FUNCSEQ_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self {
            recursion_bound,
            workers,
            log_filter,
        })
    }
}

pub(crate) fn check_workers(workers: usize) -> Result<usize, String> {
    if (1..=MAX_WORKERS).contains(&workers) {
        Ok(workers)
    } else {
        Err(format!("must be between 1 and {MAX_WORKERS}"))
    }
}

fn parse_or<L, T>(lookup: &L, key: &str, default: T) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_owned(),
            message: error.to_string(),
        })
    })
}
