use crate::utils::dp_cache::{DpCache, DpError};
use crate::utils::parse::unsigned;
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use rayon::prelude::*;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2023, day = 12, tags = ["dp", "parallel"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    springs: Vec<u8>,
    groups: Vec<usize>,
}

impl Row {
    fn unfold(&self, copies: usize) -> Row {
        let springs = vec![self.springs.as_slice(); copies].join(&b'?');
        Row {
            springs,
            groups: self.groups.repeat(copies),
        }
    }

    /// Whether a damaged group of `len` can start at `i`
    fn group_fits(&self, i: usize, len: usize) -> bool {
        let end = i + len;
        end <= self.springs.len()
            && !self.springs[i..end].contains(&b'.')
            && self.springs.get(end) != Some(&b'#')
    }

    /// Number of ways to fill in the unknown springs
    ///
    /// State `(i, g)` counts arrangements of `springs[i..]` that produce
    /// exactly `groups[g..]`.
    fn arrangements(&self) -> Result<u64, DpError> {
        let n = self.springs.len();
        let cache = DpCache::from_fns(
            |&(i, g): &(usize, usize)| {
                let mut deps = Vec::with_capacity(2);
                if i == n {
                    return deps;
                }
                let c = self.springs[i];
                if c != b'#' {
                    deps.push((i + 1, g));
                }
                if c != b'.' && g < self.groups.len() && self.group_fits(i, self.groups[g]) {
                    deps.push(((i + self.groups[g] + 1).min(n), g + 1));
                }
                deps
            },
            |&(i, g): &(usize, usize), ways: Vec<u64>| {
                if i == n {
                    u64::from(g == self.groups.len())
                } else {
                    ways.iter().sum()
                }
            },
        );
        cache.get(&(0, 0))
    }
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Row>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let (springs, groups) = line.trim().split_once(' ').ok_or_else(|| {
                    ParseError::InvalidFormat(format!("expected `springs groups`, got {:?}", line))
                })?;
                if let Some(bad) = springs.chars().find(|c| !matches!(c, '.' | '#' | '?')) {
                    return Err(ParseError::InvalidFormat(format!("unknown spring {:?}", bad)));
                }
                Ok(Row {
                    springs: springs.as_bytes().to_vec(),
                    groups: unsigned(groups)?,
                })
            })
            .collect()
    }
}

fn total_arrangements(rows: &[Row], copies: usize) -> Result<u64, SolveError> {
    let counts = rows
        .par_iter()
        .map(|row| row.unfold(copies).arrangements())
        .collect::<Result<Vec<_>, _>>()
        .map_err(SolveError::failed)?;
    Ok(counts.into_iter().sum())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_arrangements(shared, 1)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_arrangements(shared, 5)?.to_string())
    }
}
