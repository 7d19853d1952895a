#![cfg(feature = "demo")]
//! Integration tests for the demo commands, driven through the CLI parser.

use clap::Parser;
use funcseq::demo::{Cli, DemoConfig, run};
use rstest::rstest;

fn run_args(arguments: &[&str]) -> Vec<String> {
    let cli = Cli::try_parse_from(std::iter::once("funcseq").chain(arguments.iter().copied()))
        .unwrap();
    run(&cli.command, &DemoConfig::default())
}

#[rstest]
#[case(&["map"], "square of [1, 2, 3]: [1, 4, 9]")]
#[case(&["filter"], "evens of [200, 400, 500, 503, 429, 418]: [200, 400, 500, 418]")]
#[case(&["reduce"], "sum of [1, 2, 3, 4, 5, 6, 7, 8, 9, 10] is 55")]
#[case(&["any"], "numbers: [1, 2, 3, 4, 5]")]
#[case(&["greet"], "G'day, Gophers")]
#[case(&["hello"], "Hello, World!")]
#[case(&["envs"], r#"prod envs: ["prod1", "prod2", "prod3"]"#)]
#[case(&["factorial"], "factorial(3) = 6")]
#[case(&["count", "--bound", "1000"], "completed successfully")]
#[case(&["person"], r#"builder:  Person { name: "Gopher", age: 10 }"#)]
#[case(&["concurrent", "--workers", "3"], "merged in task order: [0, 1, 2]")]
fn first_line_of_each_demo(#[case] arguments: &[&str], #[case] expected: &str) {
    assert_eq!(run_args(arguments)[0], expected);
}

#[rstest]
fn reduce_with_large_numbers_does_not_panic() {
    let lines = run_args(&["reduce", "10000000000", "10000000000"]);
    assert_eq!(lines[1], "product of [10000000000, 10000000000] is 7766279631452241920");
}

#[rstest]
fn filter_range_is_configurable() {
    let lines = run_args(&["filter", "--min", "500", "--max", "599", "500", "503", "404"]);
    assert_eq!(lines[1], "statuses in [500, 599]: [500, 503]");
}

#[rstest]
fn greet_uses_custom_prefix() {
    assert_eq!(
        run_args(&["greet", "--prefix", "Hi", "Ada", "Grace"]),
        vec!["Hi, Ada", "Hi, Grace"]
    );
}

#[rstest]
fn config_loaded_from_lookup_drives_defaults() {
    let config = DemoConfig::from_lookup(|key| (key == "FUNCSEQ_WORKERS").then(|| "2".to_owned()))
        .unwrap();
    let cli = Cli::try_parse_from(["funcseq", "concurrent"]).unwrap();
    assert_eq!(run(&cli.command, &config)[0], "merged in task order: [0, 1]");
}
