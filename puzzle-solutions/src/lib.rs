//! Advent of Code and Everybody Codes solutions
//!
//! [`utils`] holds the shared library (grids, graph search, parsing,
//! combinatorics). With the default `solutions` feature every puzzle under
//! [`solutions`] registers itself through `#[derive(AutoRegisterSolver)]`,
//! so linking this crate is enough for a runner to find them:
//!
//! ```no_run
//! use puzzle_solutions as _;
//! use puzzle_solver::RegistryBuilder;
//!
//! let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
//! println!("{} solvers", registry.len());
//! ```

pub mod utils;

#[cfg(feature = "solutions")]
pub mod solutions;
