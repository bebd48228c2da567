use crate::utils::graph::{Bfs, Visit};
use crate::utils::parse::blocks;
use crate::utils::{Coord, Grid};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 3)]
#[puzzle(event = "ec", year = 2024, day = 3, tags = ["grid", "bfs"])]
pub struct Solver;

/// `true` where earth can be dug
type Site = Grid<bool>;

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Site>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let notes = blocks(input);
        if notes.is_empty() {
            return Err(ParseError::MissingData("no notes".to_string()));
        }
        notes
            .into_iter()
            .map(|note| {
                Grid::parse_with(note, |c| match c {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    _ => Err(ParseError::InvalidFormat(format!("unexpected {:?}", c))),
                })
            })
            .collect()
    }
}

/// Total blocks that can be dug, layer by layer
///
/// A block can go one level deeper than its shallowest neighbour, and
/// anything outside the site counts as level ground, so each block's depth
/// is its distance to the nearest open cell.
fn dig(site: &Site, diagonal: bool) -> usize {
    // one ring of level ground around the site
    let padded = Grid::from_fn(site.width() + 2, site.height() + 2, |c| {
        site.get(c - Coord::new(1, 1)).copied().unwrap_or(false)
    });
    let level: Vec<Coord> = padded.iter().filter(|&(_, &earth)| !earth).map(|(c, _)| c).collect();

    Bfs::new(level, |c: &Coord| -> Vec<Coord> {
        if diagonal {
            padded.neighbors8(*c).collect()
        } else {
            padded.neighbors4(*c).collect()
        }
    })
    .map(|Visit { cost, .. }| cost)
    .sum()
}

fn site_for(shared: &[Site], part: u8) -> Result<&Site, SolveError> {
    shared
        .get(usize::from(part) - 1)
        .ok_or_else(|| SolveError::failed(format!("no notes for part {}", part)))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(dig(site_for(shared, 1)?, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(dig(site_for(shared, 2)?, false).to_string())
    }
}

impl PartSolver<3> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(dig(site_for(shared, 3)?, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::answer;

    const SITE: &str = "\
..........
..###.##..
...####...
..######..
..######..
...####...
..........";

    #[test]
    fn test_examples() {
        let notes = format!("{SITE}\n\n{SITE}\n\n{SITE}\n");
        assert_eq!(answer::<Solver>(&notes, 1), "35");
        assert_eq!(answer::<Solver>(&notes, 2), "35");
        assert_eq!(answer::<Solver>(&notes, 3), "29");
    }

    #[test]
    fn test_earth_touching_the_edge_is_one_deep() {
        assert_eq!(dig(&Solver::parse("###").unwrap()[0], false), 3);
        assert_eq!(dig(&Solver::parse("###\n###\n###").unwrap()[0], false), 10);
        assert_eq!(dig(&Solver::parse("###\n###\n###").unwrap()[0], true), 10);
    }
}
