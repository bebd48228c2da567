use crate::utils::graph::{AStar, dijkstra_distance};
use crate::utils::{Coord, Grid};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2021, day = 15, tags = ["grid", "dijkstra"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = Grid<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |c| {
            c.to_digit(10)
                .filter(|&d| d > 0)
                .ok_or_else(|| ParseError::InvalidFormat(format!("risk must be 1-9, got {:?}", c)))
        })
    }
}

/// The cave repeated five times in each direction, risk rising by one per tile
fn full_map(tile: &Grid<u32>) -> Grid<u32> {
    let (w, h) = (tile.width(), tile.height());
    Grid::from_fn(w * 5, h * 5, |c| {
        let (x, y) = (c.x as usize, c.y as usize);
        let base = tile[Coord::new((x % w) as i64, (y % h) as i64)];
        let bump = (x / w + y / h) as u32;
        (base + bump - 1) % 9 + 1
    })
}

fn exit_of(cave: &Grid<u32>) -> Coord {
    Coord::new(cave.width() as i64 - 1, cave.height() as i64 - 1)
}

fn entering(cave: &Grid<u32>) -> impl FnMut(&Coord) -> Vec<(Coord, u32)> + '_ {
    move |c: &Coord| cave.neighbors4(*c).map(|n| (n, cave[n])).collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let exit = exit_of(shared);
        dijkstra_distance([Coord::ORIGIN], entering(shared), |&c| c == exit)
            .map(|risk| risk.to_string())
            .ok_or_else(|| SolveError::failed("exit unreachable"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cave = full_map(shared);
        let exit = exit_of(&cave);
        // every step costs at least 1, so the manhattan distance never overestimates
        let mut search = AStar::new([Coord::ORIGIN], entering(&cave), |c: &Coord| {
            c.manhattan(exit) as u32
        });
        search
            .find(|visit| visit.vertex == exit)
            .map(|visit| visit.cost.to_string())
            .ok_or_else(|| SolveError::failed("exit unreachable"))
    }
}
