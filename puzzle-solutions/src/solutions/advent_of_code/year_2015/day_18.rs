use crate::utils::{Coord, Grid};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2015, day = 18, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    lights: Grid<bool>,
    steps: usize,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lights = Grid::parse_with(input, |c| match c {
            '#' => Ok(true),
            '.' => Ok(false),
            _ => Err(ParseError::InvalidFormat(format!("unexpected {:?}", c))),
        })?;
        Ok(SharedData { lights, steps: 100 })
    }
}

fn step(lights: &Grid<bool>) -> Grid<bool> {
    Grid::from_fn(lights.width(), lights.height(), |c| {
        let on = lights.neighbors8(c).filter(|&n| lights[n]).count();
        matches!((lights[c], on), (true, 2 | 3) | (false, 3))
    })
}

fn corners(lights: &Grid<bool>) -> [Coord; 4] {
    let (w, h) = (lights.width() as i64 - 1, lights.height() as i64 - 1);
    [
        Coord::new(0, 0),
        Coord::new(w, 0),
        Coord::new(0, h),
        Coord::new(w, h),
    ]
}

fn animate(shared: &SharedData, stuck_corners: bool) -> usize {
    let stick = |mut lights: Grid<bool>| {
        if stuck_corners {
            for c in corners(&lights) {
                lights[c] = true;
            }
        }
        lights
    };
    let mut lights = stick(shared.lights.clone());
    for _ in 0..shared.steps {
        lights = stick(step(&lights));
    }
    lights.count(|&on| on)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_solver::Solver as _;

    const EXAMPLE: &str = "\
.#.#.#
...##.
#....#
..#...
#.#..#
####..";

    fn example(part: u8, steps: usize) -> String {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        shared.steps = steps;
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn test_single_step() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        let next = step(&shared.lights);
        let expected = Solver::parse("..##..\n..##.#\n...##.\n......\n#.....\n#.##..")
            .unwrap()
            .lights;
        assert_eq!(next, expected);
    }

    #[test]
    fn test_examples() {
        assert_eq!(example(1, 4), "4");
        assert_eq!(example(2, 5), "17");
    }
}
