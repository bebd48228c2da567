use crate::utils::parse::{captures, invalid_format};
use anyhow::Context;
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use regex::Regex;
use std::sync::LazyLock;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2015, day = 14, tags = ["simulation", "parsing"])]
pub struct Solver;

static REINDEER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+) can fly (\d+) km/s for (\d+) seconds, but then must rest for (\d+) seconds\.$")
        .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reindeer<'a> {
    name: &'a str,
    speed: u32,
    fly: u32,
    rest: u32,
}

impl Reindeer<'_> {
    fn distance_after(&self, seconds: u32) -> u32 {
        let cycle = self.fly + self.rest;
        let flying = seconds / cycle * self.fly + (seconds % cycle).min(self.fly);
        flying * self.speed
    }
}

#[derive(Debug)]
pub struct SharedData<'a> {
    reindeer: Vec<Reindeer<'a>>,
    race_seconds: u32,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let reindeer = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let caps = captures(&REINDEER, line)?;
                let num = |i: usize| caps[i].parse::<u32>().with_context(|| line.to_string());
                let reindeer = Reindeer {
                    name: caps.get(1).map_or("", |m| m.as_str()),
                    speed: num(2).map_err(invalid_format)?,
                    fly: num(3).map_err(invalid_format)?,
                    rest: num(4).map_err(invalid_format)?,
                };
                if reindeer.fly + reindeer.rest == 0 {
                    return Err(ParseError::InvalidFormat(format!("{} never moves", reindeer.name)));
                }
                Ok(reindeer)
            })
            .collect::<Result<Vec<_>, _>>()?;
        if reindeer.is_empty() {
            return Err(ParseError::MissingData("no reindeer".to_string()));
        }
        Ok(SharedData {
            reindeer,
            race_seconds: 2503,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared
            .reindeer
            .iter()
            .map(|r| r.distance_after(shared.race_seconds))
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut points = vec![0u32; shared.reindeer.len()];
        for second in 1..=shared.race_seconds {
            let distances: Vec<u32> = shared
                .reindeer
                .iter()
                .map(|r| r.distance_after(second))
                .collect();
            let lead = distances.iter().copied().max().unwrap_or(0);
            for (score, &d) in points.iter_mut().zip(&distances) {
                if d == lead {
                    *score += 1;
                }
            }
        }
        Ok(points.into_iter().max().unwrap_or(0).to_string())
    }
}
