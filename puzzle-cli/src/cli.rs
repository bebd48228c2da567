//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use puzzle_solver::Event;
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all solvers sequentially in order
    Sequential,
    /// Parallelize across years; puzzles of one year run in order
    Year,
    /// Parallelize across puzzles; parts run sequentially (default)
    #[default]
    Day,
    /// Parallelize across every puzzle part
    Part,
}

/// Advent of Code and Everybody Codes solver runner
#[derive(Parser, Debug)]
#[command(name = "puzzle", about = "Run registered puzzle solvers", version)]
pub struct Args {
    /// Event to run: aoc or ec (runs both if omitted)
    #[arg(short, long)]
    pub event: Option<Event>,

    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day or quest to run (runs all if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{event}/{year}/dayNN.txt` input files
    #[arg(long, env = "PUZZLE_INPUT_DIR", default_value = "~/.cache/puzzle_inputs")]
    pub input_dir: PathBuf,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
