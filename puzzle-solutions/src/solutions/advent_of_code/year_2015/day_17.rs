use crate::utils::combinatorics::subsets_summing_to;
use crate::utils::parse::lines_of;
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2015, day = 17, tags = ["combinatorics"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    containers: Vec<u64>,
    liters: u64,
    /// Sizes of every combination that holds exactly `liters`
    fills: Option<Vec<usize>>,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            containers: lines_of(input)?,
            liters: 150,
            fills: None,
        })
    }
}

fn fills(shared: &mut SharedData) -> &[usize] {
    shared.fills.get_or_insert_with(|| {
        subsets_summing_to(&shared.containers, shared.liters)
            .iter()
            .map(Vec::len)
            .collect()
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fills(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fills = fills(shared);
        let fewest = fills.iter().min().copied().unwrap_or(0);
        Ok(fills.iter().filter(|&&n| n == fewest).count().to_string())
    }
}
