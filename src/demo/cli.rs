//! Command line definition for the `funcseq` binary.

use clap::{Parser, Subcommand};

use super::config::check_workers;

/// Demonstrations of the sequence combinators and closure factories.
#[derive(Debug, Parser)]
#[command(name = "funcseq", version, about)]
pub struct Cli {
    /// The demonstration to run.
    #[command(subcommand)]
    pub command: Command,
}

/// One demonstration per subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Square each number and test its parity.
    Map {
        /// Numbers to transform.
        #[arg(default_values_t = vec![1, 2, 3], allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Keep even numbers, then keep statuses within a range.
    Filter {
        /// Lower bound of the status range, inclusive.
        #[arg(long, default_value_t = 400)]
        min: i64,
        /// Upper bound of the status range, inclusive.
        #[arg(long, default_value_t = 499)]
        max: i64,
        /// Status codes to filter.
        #[arg(default_values_t = vec![200, 400, 500, 503, 429, 418])]
        statuses: Vec<i64>,
    },
    /// Sum and multiply numbers.
    Reduce {
        /// Numbers to fold.
        #[arg(default_values_t = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10], allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Check whether any or all numbers are even.
    Any {
        /// Numbers to check.
        #[arg(default_values_t = vec![1, 2, 3, 4, 5], allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Greet names with a fixed prefix.
    Greet {
        /// Greeting prefix.
        #[arg(long, default_value = "G'day")]
        prefix: String,
        /// Names to greet.
        #[arg(default_values_t = vec![String::from("Gophers")])]
        names: Vec<String>,
    },
    /// Print a hello greeting, defaulting the name to "World".
    Hello {
        /// Name to greet.
        name: Option<String>,
    },
    /// Split environments into production and non-production.
    Envs {
        /// Environment names.
        #[arg(default_values_t = vec![
            String::from("prod1"),
            String::from("prod2"),
            String::from("PROD3"),
            String::from("staging"),
            String::from("dev"),
            String::from("local"),
        ])]
        environments: Vec<String>,
    },
    /// Compute factorials.
    Factorial {
        /// Inputs.
        #[arg(default_values_t = vec![3, 5, 10])]
        numbers: Vec<u64>,
    },
    /// Recurse to a large depth without growing the stack.
    Count {
        /// Depth, overriding `FUNCSEQ_RECURSION_BOUND`.
        #[arg(long)]
        bound: Option<u64>,
    },
    /// Build a record with both update styles.
    Person {
        /// Name of the person.
        #[arg(default_value = "Gopher")]
        name: String,
        /// Age of the person.
        #[arg(default_value_t = 10)]
        age: u32,
    },
    /// Collect results from concurrent tasks.
    Concurrent {
        /// Task count (1 to 256), overriding `FUNCSEQ_WORKERS`.
        #[arg(long, value_parser = parse_workers)]
        workers: Option<usize>,
    },
}

fn parse_workers(raw: &str) -> Result<usize, String> {
    let workers = raw.parse().map_err(|error: std::num::ParseIntError| error.to_string())?;
    check_workers(workers)
}
