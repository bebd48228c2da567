//! Puzzle solutions, one module per puzzle
//!
//! Every solver registers itself with `#[derive(AutoRegisterSolver)]`.
//! Tests run the worked examples from each puzzle statement.

pub mod advent_of_code;
pub mod everybody_codes;

#[cfg(test)]
pub(crate) fn answer<S: puzzle_solver::Solver>(input: &str, part: u8) -> String {
    let mut shared = S::parse(input).expect("example should parse");
    S::solve_part(&mut shared, part).expect("example should solve")
}
