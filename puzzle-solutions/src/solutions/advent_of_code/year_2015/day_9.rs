use crate::utils::parse::{captures, invalid_format};
use anyhow::Context;
use itertools::{Itertools, MinMaxResult};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2015, day = 9, tags = ["graph", "brute-force"])]
pub struct Solver;

static ROUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+) to (\w+) = (\d+)$").unwrap());

#[derive(Debug)]
pub struct SharedData {
    /// `distances[a][b]`, `None` when there is no direct route
    distances: Vec<Vec<Option<u32>>>,
    shortest_and_longest: Option<(u32, u32)>,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut edges = Vec::new();
        for (i, line) in input.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                continue;
            }
            let caps = captures(&ROUTE, line)?;
            let mut id = |name| {
                let next = index.len();
                *index.entry(name).or_insert(next)
            };
            let [from, to] = [1, 2].map(|g| caps.get(g).map_or("", |m| m.as_str()));
            let (a, b) = (id(from), id(to));
            let distance: u32 = caps[3]
                .parse()
                .with_context(|| format!("line {}", i + 1))
                .map_err(invalid_format)?;
            edges.push((a, b, distance));
        }

        let mut distances = vec![vec![None; index.len()]; index.len()];
        for (a, b, d) in edges {
            distances[a][b] = Some(d);
            distances[b][a] = Some(d);
        }
        Ok(SharedData {
            distances,
            shortest_and_longest: None,
        })
    }
}

fn route_length(distances: &[Vec<Option<u32>>], route: &[usize]) -> Option<u32> {
    route
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| distances[a][b])
        .sum()
}

fn shortest_and_longest(shared: &mut SharedData) -> Result<(u32, u32), SolveError> {
    if let Some(cached) = shared.shortest_and_longest {
        return Ok(cached);
    }
    let n = shared.distances.len();
    let lengths = (0..n)
        .permutations(n)
        // each route and its reverse have the same length
        .filter(|route| route.first() <= route.last())
        .filter_map(|route| route_length(&shared.distances, &route));
    let result = match lengths.minmax() {
        MinMaxResult::NoElements => {
            return Err(SolveError::failed("no route visits every location"));
        }
        MinMaxResult::OneElement(d) => (d, d),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };
    shared.shortest_and_longest = Some(result);
    Ok(result)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shortest_and_longest(shared)?.0.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shortest_and_longest(shared)?.1.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::answer;

    const EXAMPLE: &str = "\
London to Dublin = 464
London to Belfast = 518
Dublin to Belfast = 141";

    #[test]
    fn test_examples() {
        assert_eq!(answer::<Solver>(EXAMPLE, 1), "605");
        assert_eq!(answer::<Solver>(EXAMPLE, 2), "982");
    }

    #[test]
    fn test_result_is_cached_between_parts() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "605");
        assert_eq!(shared.shortest_and_longest, Some((605, 982)));
    }

    #[test]
    fn test_disconnected_locations() {
        let mut shared = Solver::parse("A to B = 1\nC to D = 1").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut shared).is_err());
    }
}
