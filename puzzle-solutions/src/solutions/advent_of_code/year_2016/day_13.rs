use crate::utils::Coord;
use crate::utils::graph::Bfs;
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2016, day = 13, tags = ["graph", "bfs"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    favorite: i64,
    target: Coord,
    max_steps: usize,
    /// Depth at which the search for `target` gives up
    search_limit: usize,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let favorite = input
            .trim()
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("favorite number: {}", e)))?;
        Ok(SharedData {
            favorite,
            target: Coord::new(31, 39),
            max_steps: 50,
            search_limit: 10_000,
        })
    }
}

const START: Coord = Coord::new(1, 1);

fn is_open(favorite: i64, c: Coord) -> bool {
    if c.x < 0 || c.y < 0 {
        return false;
    }
    let (x, y) = (c.x, c.y);
    (x * x + 3 * x + 2 * x * y + y + y * y + favorite).count_ones() % 2 == 0
}

fn open_neighbors(favorite: i64) -> impl FnMut(&Coord) -> Vec<Coord> {
    move |c: &Coord| c.neighbors4().filter(|&n| is_open(favorite, n)).collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (target, limit) = (shared.target, shared.search_limit);
        // the maze is unbounded, so a walled-off target needs a depth cap
        Bfs::new([START], open_neighbors(shared.favorite))
            .take_while(|visit| visit.cost <= limit)
            .find(|visit| visit.vertex == target)
            .map(|visit| visit.cost.to_string())
            .ok_or_else(|| SolveError::failed(format!("{} is not reachable within {} steps", target, limit)))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let within = Bfs::new([START], open_neighbors(shared.favorite))
            .take_while(|visit| visit.cost <= shared.max_steps)
            .count();
        Ok(within.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_solver::Solver as _;

    fn example() -> SharedData {
        let mut shared = Solver::parse("10\n").unwrap();
        shared.target = Coord::new(7, 4);
        shared
    }

    #[test]
    fn test_layout() {
        let rows: Vec<String> = (0..3)
            .map(|y| {
                (0..10)
                    .map(|x| if is_open(10, Coord::new(x, y)) { '.' } else { '#' })
                    .collect()
            })
            .collect();
        assert_eq!(rows, vec![".#.####.##", "..#..#...#", "#....##..."]);
    }

    #[test]
    fn test_example() {
        assert_eq!(Solver::solve_part(&mut example(), 1).unwrap(), "11");
    }

    #[test]
    fn test_search_gives_up_at_limit() {
        let mut shared = example();
        shared.search_limit = 11;
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11");

        shared.search_limit = 10;
        let err = Solver::solve_part(&mut shared, 1).unwrap_err();
        assert!(err.to_string().contains("not reachable within 10 steps"));

        // a wall cell can never be entered
        shared.search_limit = 100;
        shared.target = Coord::new(1, 0);
        assert!(!is_open(10, shared.target));
        assert!(Solver::solve_part(&mut shared, 1).is_err());
    }

    #[test]
    fn test_reachable_within_limit() {
        let mut shared = example();
        shared.max_steps = 0;
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
        shared.max_steps = 2;
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "5");
    }
}
