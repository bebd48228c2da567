use crate::utils::UnionFind;
use crate::utils::parse::unsigned;
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2017, day = 12, tags = ["graph", "union-find"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = UnionFind;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pipes = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| match unsigned::<usize>(line)?.split_first() {
                Some((&program, peers)) if line.contains("<->") => Ok((program, peers.to_vec())),
                _ => Err(ParseError::InvalidFormat(format!("expected `a <-> b, c`, got {:?}", line))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let size = pipes
            .iter()
            .flat_map(|(program, peers)| peers.iter().chain([program]))
            .max()
            .map_or(0, |&max| max + 1);
        let mut villages = UnionFind::new(size);
        for (program, peers) in pipes {
            for peer in peers {
                villages.union(program, peer);
            }
        }
        Ok(villages)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.is_empty() {
            return Err(SolveError::failed("program 0 is not in the list"));
        }
        Ok(shared.size_of(0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.components().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::answer;

    const EXAMPLE: &str = "\
0 <-> 2
1 <-> 1
2 <-> 0, 3, 4
3 <-> 2, 4
4 <-> 2, 3, 6
5 <-> 6
6 <-> 4, 5";

    #[test]
    fn test_examples() {
        assert_eq!(answer::<Solver>(EXAMPLE, 1), "6");
        assert_eq!(answer::<Solver>(EXAMPLE, 2), "2");
    }

    #[test]
    fn test_groups() {
        let mut villages = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(villages.groups(), vec![vec![0, 2, 3, 4, 5, 6], vec![1]]);
    }

    #[test]
    fn test_rejects_malformed_line() {
        assert!(Solver::parse("0 2").is_err());
    }
}
