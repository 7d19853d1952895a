//! Executes a demo subcommand and renders its output lines.

use super::{Command, DemoConfig};
use crate::concurrent::{SharedAccumulator, collect_concurrently};
use crate::control::{count_to, factorial};
use crate::factory::{
    FilterSet, add, filter_environments, is_even, make_default_greeting, make_greeter,
    make_range_predicate, multiply, non_prod_filter, prod_filter, square,
};
use crate::record::Person;
use crate::sequence::{ReduceError, all, any, filter, map, reduce};

/// Runs `command`, returning the lines it would print.
///
/// Nothing is written to stdout here; the binary prints the returned lines.
///
/// # Examples
///
/// ```rust
/// use funcseq::demo::{Command, DemoConfig, run};
///
/// let lines = run(&Command::Map { numbers: vec![1, 2, 3] }, &DemoConfig::default());
/// assert_eq!(lines[0], "square of [1, 2, 3]: [1, 4, 9]");
/// ```
pub fn run(command: &Command, config: &DemoConfig) -> Vec<String> {
    tracing::debug!(?command, "running demo");

    match command {
        Command::Map { numbers } => vec![
            format!("square of {numbers:?}: {:?}", map(numbers, square)),
            format!("is_even of {numbers:?}: {:?}", map(numbers, is_even)),
        ],
        Command::Filter { min, max, statuses } => {
            let in_range = make_range_predicate(*min, *max);
            vec![
                format!("evens of {statuses:?}: {:?}", filter(statuses, is_even)),
                format!(
                    "statuses in [{min}, {max}]: {:?}",
                    filter(statuses, in_range)
                ),
            ]
        }
        Command::Reduce { numbers } => vec![
            render_reduction("sum", numbers, reduce(numbers, add)),
            render_reduction("product", numbers, reduce(numbers, multiply)),
        ],
        Command::Any { numbers } => vec![
            format!("numbers: {numbers:?}"),
            format!("are any of the numbers even? {}", any(numbers, is_even)),
            format!("are all of the numbers even? {}", all(numbers, is_even)),
        ],
        Command::Greet { prefix, names } => {
            let greeter = make_greeter(prefix.as_str());
            map(names, |name| greeter(name.as_str()))
        }
        Command::Hello { name } => {
            vec![make_default_greeting(name.as_deref().unwrap_or_default())()]
        }
        Command::Envs { environments } => {
            let without_prod = FilterSet::new().with(prod_filter);
            let without_non_prod = FilterSet::new().with(non_prod_filter);
            vec![
                format!(
                    "prod envs: {:?}",
                    filter_environments(environments, &without_non_prod)
                ),
                format!(
                    "non-prod envs: {:?}",
                    filter_environments(environments, &without_prod)
                ),
            ]
        }
        Command::Factorial { numbers } => map(numbers, |&n| match factorial(n) {
            Some(value) => format!("factorial({n}) = {value}"),
            None => format!("factorial({n}) overflows u64"),
        }),
        Command::Count { bound } => {
            let bound = bound.unwrap_or(config.recursion_bound);
            vec![count_to(bound).to_owned()]
        }
        Command::Person { name, age } => {
            let built = Person::build(name.as_str(), *age);
            let in_place = Person::build_in_place(name.as_str(), *age);
            vec![
                format!("builder:  {built:?}"),
                format!("mutator:  {in_place:?}"),
                format!("equal: {}", built == *in_place),
            ]
        }
        Command::Concurrent { workers } => {
            let workers = workers.unwrap_or(config.workers);
            let merged = collect_concurrently(workers, |index| index);

            let accumulator = SharedAccumulator::new();
            std::thread::scope(|scope| {
                for index in 0..workers {
                    let accumulator = &accumulator;
                    scope.spawn(move || accumulator.push(index));
                }
            });
            let mut guarded = accumulator.into_inner();
            guarded.sort_unstable();

            vec![
                format!("merged in task order: {merged:?}"),
                format!("mutex-guarded, sorted: {guarded:?}"),
            ]
        }
    }
}

fn render_reduction(
    label: &str,
    numbers: &[i64],
    result: Result<i64, ReduceError>,
) -> String {
    match result {
        Ok(value) => format!("{label} of {numbers:?} is {value}"),
        Err(error) => format!("{label} of {numbers:?} failed: {error}"),
    }
}
