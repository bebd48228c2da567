//! Command-line runner for Advent of Code and Everybody Codes solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Link the solutions crate so its solver plugins are collected
use puzzle_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use inputs::InputStore;
use output::OutputFormatter;
use puzzle_solver::{RegistryBuilder, SolverRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // stdout carries answers, so diagnostics go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry(&config)?;
    tracing::debug!(solvers = registry.len(), input_dir = %config.input_dir.display(), "registry built");

    let executor = Executor::new(registry, &config)?;
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let store = InputStore::new(config.input_dir.clone());
    let missing: Vec<_> = work_items.iter().filter(|w| !store.contains(w.id)).collect();
    if !missing.is_empty() && !config.quiet {
        println!("Missing {} input file(s):", missing.len());
        for work in &missing {
            println!("  - {}", store.path(work.id).display());
        }
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }
    let expected_keys = ResultKey::expected(&work_items);

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(config.quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        tracing::warn!("not all expected results were received");
    }

    let outcome = executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))?;

    formatter.print_summary(&results);

    outcome.map_err(CliError::Executor)
}

/// Registry of the plugins matching the event filter and every requested tag
fn build_registry(config: &Config) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new().register_solver_plugins(|plugin| config.accepts(plugin))?;

    Ok(builder.build())
}
