use crate::utils::combinatorics::compositions;
use crate::utils::parse::ints;
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use rayon::prelude::*;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(event = "aoc", year = 2015, day = 15, tags = ["combinatorics", "parallel"])]
pub struct Solver;

/// capacity, durability, flavor, texture
const PROPERTIES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingredient {
    properties: [i64; PROPERTIES],
    calories: i64,
}

#[derive(Debug)]
pub struct SharedData {
    ingredients: Vec<Ingredient>,
    teaspoons: u64,
    calorie_target: i64,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let ingredients = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| match ints::<i64>(line)?.as_slice() {
                &[capacity, durability, flavor, texture, calories] => Ok(Ingredient {
                    properties: [capacity, durability, flavor, texture],
                    calories,
                }),
                _ => Err(ParseError::InvalidFormat(format!(
                    "expected five properties in {:?}",
                    line
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if ingredients.is_empty() {
            return Err(ParseError::MissingData("no ingredients".to_string()));
        }
        Ok(SharedData {
            ingredients,
            teaspoons: 100,
            calorie_target: 500,
        })
    }
}

fn score(ingredients: &[Ingredient], amounts: &[u64]) -> i64 {
    (0..PROPERTIES)
        .map(|p| {
            ingredients
                .iter()
                .zip(amounts)
                .map(|(ingredient, &n)| ingredient.properties[p] * n as i64)
                .sum::<i64>()
                .max(0)
        })
        .product()
}

fn calories(ingredients: &[Ingredient], amounts: &[u64]) -> i64 {
    ingredients
        .iter()
        .zip(amounts)
        .map(|(ingredient, &n)| ingredient.calories * n as i64)
        .sum()
}

fn best_score(shared: &SharedData, calorie_target: Option<i64>) -> i64 {
    let ingredients = &shared.ingredients;
    compositions(shared.teaspoons, ingredients.len())
        .par_bridge()
        .filter(|amounts| calorie_target.is_none_or(|target| calories(ingredients, amounts) == target))
        .map(|amounts| score(ingredients, &amounts))
        .max()
        .unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_score(shared, None).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_score(shared, Some(shared.calorie_target)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::answer;

    const EXAMPLE: &str = "\
Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8
Cinnamon: capacity 2, durability 3, flavor -2, texture -1, calories 3";

    #[test]
    fn test_score_of_example_recipe() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(score(&shared.ingredients, &[44, 56]), 62842880);
        assert_eq!(calories(&shared.ingredients, &[40, 60]), 500);
    }

    #[test]
    fn test_examples() {
        assert_eq!(answer::<Solver>(EXAMPLE, 1), "62842880");
        assert_eq!(answer::<Solver>(EXAMPLE, 2), "57600000");
    }
}
