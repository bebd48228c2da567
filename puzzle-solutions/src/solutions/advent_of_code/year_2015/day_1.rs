use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2015, day = 1, tags = ["warmup"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<i8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .chars()
            .enumerate()
            .map(|(i, c)| match c {
                '(' => Ok(1),
                ')' => Ok(-1),
                _ => Err(ParseError::InvalidFormat(format!(
                    "unexpected {:?} at position {}",
                    c,
                    i + 1
                ))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|&step| i64::from(step)).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .scan(0i64, |floor, &step| {
                *floor += i64::from(step);
                Some(*floor)
            })
            .position(|floor| floor < 0)
            .map(|i| (i + 1).to_string())
            .ok_or_else(|| SolveError::failed("Santa never enters the basement"))
    }
}
