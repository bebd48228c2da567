use crate::utils::parse::{captures, invalid_format};
use crate::utils::{Coord, Grid};
use anyhow::{Context, bail};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use regex::Regex;
use std::sync::LazyLock;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2015, day = 6, tags = ["grid", "parsing"])]
pub struct Solver;

const SIZE: usize = 1000;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(turn on|turn off|toggle) (\d+),(\d+) through (\d+),(\d+)$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    On,
    Off,
    Toggle,
}

#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    action: Action,
    from: Coord,
    to: Coord,
}

impl Instruction {
    fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let (from, to) = (self.from, self.to);
        (from.y..=to.y).flat_map(move |y| (from.x..=to.x).map(move |x| Coord::new(x, y)))
    }
}

fn parse_instruction(line: &str) -> anyhow::Result<Instruction> {
    let caps = captures(&INSTRUCTION, line)?;
    let action = match &caps[1] {
        "turn on" => Action::On,
        "turn off" => Action::Off,
        _ => Action::Toggle,
    };
    let num = |i: usize| -> anyhow::Result<i64> {
        let n: i64 = caps[i].parse()?;
        if n as usize >= SIZE {
            bail!("{} is outside the {}x{} display", n, SIZE, SIZE);
        }
        Ok(n)
    };
    let from = Coord::new(num(2)?, num(3)?);
    let to = Coord::new(num(4)?, num(5)?);
    if from.x > to.x || from.y > to.y {
        bail!("corners out of order");
    }
    Ok(Instruction { action, from, to })
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| parse_instruction(line).with_context(|| format!("line {}", i + 1)))
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

fn run<T: Clone + Copy>(
    instructions: &[Instruction],
    off: T,
    apply: impl Fn(Action, T) -> T,
) -> Grid<T> {
    let mut lights = Grid::new(SIZE, SIZE, off);
    for instruction in instructions {
        for c in instruction.cells() {
            lights[c] = apply(instruction.action, lights[c]);
        }
    }
    lights
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lights = run(shared, false, |action, lit| match action {
            Action::On => true,
            Action::Off => false,
            Action::Toggle => !lit,
        });
        Ok(lights.count(|&lit| lit).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lights = run(shared, 0u32, |action, level| match action {
            Action::On => level + 1,
            Action::Off => level.saturating_sub(1),
            Action::Toggle => level + 2,
        });
        Ok(lights.values().map(|&b| u64::from(b)).sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::answer;

    #[test]
    fn test_part1_examples() {
        assert_eq!(answer::<Solver>("turn on 0,0 through 999,999", 1), "1000000");
        assert_eq!(answer::<Solver>("toggle 0,0 through 999,0", 1), "1000");
        assert_eq!(
            answer::<Solver>(
                "turn on 0,0 through 999,999\ntoggle 0,0 through 999,0\nturn off 499,499 through 500,500",
                1
            ),
            "998996"
        );
    }

    #[test]
    fn test_part2_examples() {
        assert_eq!(answer::<Solver>("turn on 0,0 through 0,0", 2), "1");
        assert_eq!(answer::<Solver>("toggle 0,0 through 999,999", 2), "2000000");
        assert_eq!(answer::<Solver>("turn off 0,0 through 5,5", 2), "0");
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let err = Solver::parse("toggle 0,0 through 1,1\nturn up 1,1 through 2,2").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
        assert!(Solver::parse("toggle 0,0 through 1000,1").is_err());
    }
}
