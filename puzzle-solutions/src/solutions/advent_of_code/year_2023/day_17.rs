use crate::utils::graph::dijkstra_distance;
use crate::utils::{Coord, Direction, Grid};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2023, day = 17, tags = ["grid", "dijkstra"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = Grid<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |c| {
            c.to_digit(10)
                .ok_or_else(|| ParseError::InvalidFormat(format!("heat loss must be a digit, got {:?}", c)))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Crucible {
    pos: Coord,
    heading: Direction,
    /// Blocks moved in a straight line since the last turn
    run: u8,
}

/// Least heat loss from the top-left to the bottom-right block
///
/// A crucible must move `min_run` blocks before it may turn or stop, and may
/// not move more than `max_run` blocks in a straight line.
fn least_heat_loss(city: &Grid<u32>, min_run: u8, max_run: u8) -> Option<u32> {
    let factory = Coord::new(city.width() as i64 - 1, city.height() as i64 - 1);
    let starts = [Direction::East, Direction::South].map(|heading| Crucible {
        pos: Coord::ORIGIN,
        heading,
        run: 0,
    });

    dijkstra_distance(
        starts,
        |state: &Crucible| {
            let mut moves = Vec::with_capacity(3);
            for heading in [state.heading, state.heading.turn_left(), state.heading.turn_right()] {
                let straight = heading == state.heading;
                if (straight && state.run >= max_run) || (!straight && state.run < min_run) {
                    continue;
                }
                let pos = state.pos.step(heading);
                if let Some(&loss) = city.get(pos) {
                    let run = if straight { state.run + 1 } else { 1 };
                    moves.push((Crucible { pos, heading, run }, loss));
                }
            }
            moves
        },
        |state| state.pos == factory && state.run >= min_run,
    )
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_heat_loss(shared, 1, 3)
            .map(|loss| loss.to_string())
            .ok_or_else(|| SolveError::failed("no route to the factory"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_heat_loss(shared, 4, 10)
            .map(|loss| loss.to_string())
            .ok_or_else(|| SolveError::failed("no route to the factory"))
    }
}
