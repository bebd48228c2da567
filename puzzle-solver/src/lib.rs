//! Puzzle Solver Library
//!
//! A small type-safe framework for Advent of Code and Everybody Codes
//! solutions. Every puzzle parses its input once into shared data and then
//! answers one or more parts against it.
//!
//! # Overview
//!
//! - [`PuzzleParser`] turns raw input into `SharedData`
//! - [`PartSolver<N>`] answers part `N`; [`Solver`] dispatches by part number
//! - [`SolverInstance`] / [`DynSolver`] hold parsed state and time each call
//! - [`RegistryBuilder`] / [`SolverRegistry`] map a [`PuzzleId`] to a factory
//! - [`SolverPlugin`] records are collected at link time with `inventory`
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{
//!     PartSolver, ParseError, PuzzleId, PuzzleParser, PuzzleSolver, RegistryBuilder,
//!     SolveError, register_solver,
//! };
//!
//! #[derive(PuzzleSolver)]
//! #[puzzle_solver(max_parts = 2)]
//! struct Day1;
//!
//! impl PuzzleParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, Day1, PuzzleId::aoc(2023, 1).unwrap());
//! let registry = builder.build();
//!
//! let mut solver = registry
//!     .create_solver(PuzzleId::aoc(2023, 1).unwrap(), "1\n2\n3")
//!     .unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "3");
//! ```
//!
//! Solutions in a library crate usually add `#[derive(AutoRegisterSolver)]`
//! with `#[puzzle(event = "aoc", year = 2023, day = 1)]` and let the runner
//! call [`RegistryBuilder::register_all_plugins`].

mod error;
mod id;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use id::{Event, PuzzleId, UnknownEvent};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry, instantiate,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Used by the derive macros
pub use inventory;

pub use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
