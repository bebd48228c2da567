use itertools::Itertools;
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use std::collections::HashMap;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2015, day = 5, tags = ["strings"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                if line.bytes().all(|b| b.is_ascii_lowercase()) {
                    Ok(line.as_bytes())
                } else {
                    Err(ParseError::InvalidFormat(format!("{:?} is not lowercase ascii", line)))
                }
            })
            .collect()
    }
}

fn nice_v1(s: &[u8]) -> bool {
    let vowels = s.iter().filter(|&&b| b"aeiou".contains(&b)).count();
    let doubled = s.iter().tuple_windows().any(|(a, b)| a == b);
    let forbidden = s
        .iter()
        .tuple_windows()
        .any(|(&a, &b)| matches!([a, b], [b'a', b'b'] | [b'c', b'd'] | [b'p', b'q'] | [b'x', b'y']));
    vowels >= 3 && doubled && !forbidden
}

fn nice_v2(s: &[u8]) -> bool {
    // first index at which each pair starts
    let mut first_seen: HashMap<(u8, u8), usize> = HashMap::new();
    let repeated_pair = s.iter().tuple_windows().enumerate().any(|(i, (&a, &b))| {
        let first = *first_seen.entry((a, b)).or_insert(i);
        i >= first + 2
    });
    let sandwich = s.iter().tuple_windows().any(|(a, _, c)| a == c);
    repeated_pair && sandwich
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| nice_v1(s)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| nice_v2(s)).count().to_string())
    }
}
