use crate::utils::parse::unsigned;
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2015, day = 2, tags = ["warmup", "parsing"])]
pub struct Solver;

/// Box dimensions, smallest first
type Dimensions = [u64; 3];

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Dimensions>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let mut dims: Dimensions = unsigned::<u64>(line)?.try_into().map_err(|_| {
                    ParseError::InvalidFormat(format!("expected LxWxH, got {:?}", line))
                })?;
                dims.sort_unstable();
                Ok(dims)
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let paper: u64 = shared
            .iter()
            .map(|&[a, b, c]| 2 * (a * b + b * c + a * c) + a * b)
            .sum();
        Ok(paper.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ribbon: u64 = shared
            .iter()
            .map(|&[a, b, c]| 2 * (a + b) + a * b * c)
            .sum();
        Ok(ribbon.to_string())
    }
}
