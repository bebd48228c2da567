use crate::utils::{Coord, Grid};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use std::collections::HashMap;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2017, day = 21, tags = ["grid", "simulation"])]
pub struct Solver;

const START: &str = ".#./..#/###";

#[derive(Debug)]
pub struct SharedData {
    /// Every rotation and flip of every rule input, mapped to its output
    rules: HashMap<Grid<bool>, Grid<bool>>,
    iterations: [usize; 2],
}

fn pattern(s: &str) -> Result<Grid<bool>, ParseError> {
    Grid::parse_with(&s.trim().replace('/', "\n"), |c| match c {
        '#' => Ok(true),
        '.' => Ok(false),
        _ => Err(ParseError::InvalidFormat(format!("unexpected {:?} in {}", c, s))),
    })
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut rules = HashMap::new();
        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            let (from, to) = line
                .split_once("=>")
                .ok_or_else(|| ParseError::InvalidFormat(format!("missing => in {:?}", line)))?;
            let (from, to) = (pattern(from)?, pattern(to)?);
            if from.width() != from.height() || to.width() != from.width() + 1 {
                return Err(ParseError::InvalidFormat(format!("bad rule shape: {}", line)));
            }
            for variant in from.variants() {
                rules.insert(variant, to.clone());
            }
        }
        Ok(SharedData {
            rules,
            iterations: [5, 18],
        })
    }
}

fn enhance(art: &Grid<bool>, rules: &HashMap<Grid<bool>, Grid<bool>>) -> Result<Grid<bool>, SolveError> {
    let size = art.width();
    let block = if size % 2 == 0 { 2 } else { 3 };
    let blocks = size / block;

    let mut outputs = Vec::with_capacity(blocks * blocks);
    for by in 0..blocks {
        for bx in 0..blocks {
            let square = Grid::from_fn(block, block, |c| {
                art[c + Coord::new((bx * block) as i64, (by * block) as i64)]
            });
            let out = rules.get(&square).ok_or_else(|| {
                let shown = square.map(|&on| if on { '#' } else { '.' });
                SolveError::failed(format!("no rule matches\n{}", shown))
            })?;
            outputs.push(out);
        }
    }

    let out_block = block + 1;
    Ok(Grid::from_fn(blocks * out_block, blocks * out_block, |c| {
        let (x, y) = (c.x as usize, c.y as usize);
        let tile = outputs[(y / out_block) * blocks + x / out_block];
        tile[Coord::new((x % out_block) as i64, (y % out_block) as i64)]
    }))
}

fn lit_after(shared: &SharedData, iterations: usize) -> Result<usize, SolveError> {
    let mut art = pattern(START).map_err(SolveError::failed)?;
    for _ in 0..iterations {
        art = enhance(&art, &shared.rules)?;
    }
    Ok(art.count(|&on| on))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lit_after(shared, shared.iterations[0])?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lit_after(shared, shared.iterations[1])?.to_string())
    }
}
