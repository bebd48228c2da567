use crate::utils::graph::Bfs;
use crate::utils::{Coord, Grid};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2022, day = 12, tags = ["grid", "bfs"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    heights: Grid<u8>,
    start: Coord,
    end: Coord,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let raw = Grid::parse_chars(input)?;
        let locate = |marker: char| {
            raw.find(|&c| c == marker)
                .ok_or_else(|| ParseError::MissingData(format!("no {} on the map", marker)))
        };
        let (start, end) = (locate('S')?, locate('E')?);
        let heights = raw.map(|&c| match c {
            'S' => 0,
            'E' => 25,
            'a'..='z' => c as u8 - b'a',
            _ => u8::MAX,
        });
        if let Some(bad) = heights.find(|&h| h == u8::MAX) {
            return Err(ParseError::InvalidFormat(format!("unexpected {:?} at {}", raw[bad], bad)));
        }
        Ok(SharedData {
            heights,
            start,
            end,
        })
    }
}

/// Fewest steps from any of `starts` to the summit, climbing at most one level per step
fn climb(shared: &SharedData, starts: impl IntoIterator<Item = Coord>) -> Result<usize, SolveError> {
    let heights = &shared.heights;
    Bfs::new(starts, |c: &Coord| {
        let limit = heights[*c] + 1;
        heights
            .neighbors4(*c)
            .filter(|&n| heights[n] <= limit)
            .collect::<Vec<_>>()
    })
    .find(|visit| visit.vertex == shared.end)
    .map(|visit| visit.cost)
    .ok_or_else(|| SolveError::failed("the summit is unreachable"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(climb(shared, [shared.start])?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lowest: Vec<Coord> = shared
            .heights
            .iter()
            .filter(|&(_, &h)| h == 0)
            .map(|(c, _)| c)
            .collect();
        Ok(climb(shared, lowest)?.to_string())
    }
}
