use crate::utils::{Coord, Direction};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use std::collections::HashSet;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2015, day = 3, tags = ["warmup", "coord"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Direction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| {
                Direction::from_char(c)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("not a move: {:?}", c)))
            })
            .collect()
    }
}

/// Houses visited when `movers` deliverers take turns following the moves
fn visited(moves: &[Direction], movers: usize) -> usize {
    let mut positions = vec![Coord::ORIGIN; movers];
    let mut houses = HashSet::from([Coord::ORIGIN]);
    for (i, &d) in moves.iter().enumerate() {
        let pos = &mut positions[i % movers];
        *pos = pos.step(d);
        houses.insert(*pos);
    }
    houses.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited(shared, 2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::answer;

    #[test]
    fn test_part1_examples() {
        assert_eq!(answer::<Solver>(">", 1), "2");
        assert_eq!(answer::<Solver>("^>v<", 1), "4");
        assert_eq!(answer::<Solver>("^v^v^v^v^v", 1), "2");
    }

    #[test]
    fn test_part2_examples() {
        assert_eq!(answer::<Solver>("^v", 2), "3");
        assert_eq!(answer::<Solver>("^>v<", 2), "3");
        assert_eq!(answer::<Solver>("^v^v^v^v^v", 2), "11");
    }
}
