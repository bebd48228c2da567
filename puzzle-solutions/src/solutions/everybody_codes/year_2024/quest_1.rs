//! Everybody Codes publishes separate notes for each part of a quest; the
//! input file holds them in part order, separated by blank lines.

use crate::utils::parse::blocks;
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 3)]
#[puzzle(event = "ec", year = 2024, day = 1, tags = ["warmup"])]
pub struct Solver;

/// Creatures in battle order; `None` is an empty slot
type Battle = Vec<Option<u64>>;

fn potions_for(creature: char) -> Result<Option<u64>, ParseError> {
    match creature {
        'A' => Ok(Some(0)),
        'B' => Ok(Some(1)),
        'C' => Ok(Some(3)),
        'D' => Ok(Some(5)),
        'x' => Ok(None),
        _ => Err(ParseError::InvalidFormat(format!("unknown creature {:?}", creature))),
    }
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Battle>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let notes = blocks(input);
        if notes.is_empty() {
            return Err(ParseError::MissingData("no notes".to_string()));
        }
        notes
            .into_iter()
            .map(|note| {
                note.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(potions_for)
                    .collect::<Result<Battle, _>>()
            })
            .collect()
    }
}

/// Potions for a battle where creatures fight in groups of `group`
///
/// Every creature in a group of `n` present creatures needs `n - 1` extra.
fn potions(battle: &[Option<u64>], group: usize) -> u64 {
    battle
        .chunks(group)
        .map(|fighters| {
            let present: Vec<u64> = fighters.iter().flatten().copied().collect();
            let n = present.len() as u64;
            present.iter().sum::<u64>() + n * n.saturating_sub(1)
        })
        .sum()
}

fn notes_for(shared: &[Battle], part: u8) -> Result<&Battle, SolveError> {
    shared
        .get(usize::from(part) - 1)
        .ok_or_else(|| SolveError::failed(format!("no notes for part {}", part)))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(potions(notes_for(shared, 1)?, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(potions(notes_for(shared, 2)?, 2).to_string())
    }
}

impl PartSolver<3> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(potions(notes_for(shared, 3)?, 3).to_string())
    }
}
