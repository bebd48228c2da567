use crate::utils::parse::lines_of;
use itertools::Itertools;
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2015, day = 24, tags = ["combinatorics", "brute-force"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut weights: Vec<u64> = lines_of(input)?;
        if weights.is_empty() {
            return Err(ParseError::MissingData("no packages".to_string()));
        }
        weights.sort_unstable_by(|a, b| b.cmp(a));
        Ok(weights)
    }
}

/// Whether `items` (heaviest first) split into `groups` piles of `target` each
fn can_split(items: &[u64], groups: usize, target: u64) -> bool {
    if items.iter().sum::<u64>() != target * groups as u64 {
        return false;
    }
    let mut piles = vec![0; groups];
    fill(items, &mut piles, target)
}

fn fill(items: &[u64], piles: &mut [u64], target: u64) -> bool {
    let Some((&item, rest)) = items.split_first() else {
        return true;
    };
    for i in 0..piles.len() {
        // piles with equal load are interchangeable
        if piles[i] + item > target || piles[..i].contains(&piles[i]) {
            continue;
        }
        piles[i] += item;
        if fill(rest, piles, target) {
            return true;
        }
        piles[i] -= item;
    }
    false
}

/// Lowest quantum entanglement among the smallest valid passenger groups
fn balance(weights: &[u64], groups: usize) -> Result<u64, SolveError> {
    let total: u64 = weights.iter().sum();
    if groups == 0 || total % groups as u64 != 0 {
        return Err(SolveError::failed(format!(
            "{} cannot be split into {} equal groups",
            total, groups
        )));
    }
    let target = total / groups as u64;

    for size in 1..=weights.len() {
        let mut candidates: Vec<(u64, Vec<usize>)> = (0..weights.len())
            .combinations(size)
            .filter(|chosen| chosen.iter().map(|&i| weights[i]).sum::<u64>() == target)
            .map(|chosen| (chosen.iter().map(|&i| weights[i]).product(), chosen))
            .collect();
        candidates.sort_unstable();

        for (entanglement, chosen) in candidates {
            let rest: Vec<u64> = (0..weights.len())
                .filter(|i| !chosen.contains(i))
                .map(|i| weights[i])
                .collect();
            if can_split(&rest, groups - 1, target) {
                return Ok(entanglement);
            }
        }
    }
    Err(SolveError::failed("no balanced arrangement"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(balance(shared, 3)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(balance(shared, 4)?.to_string())
    }
}
