use puzzle_solver::{
    AutoRegisterSolver, Event, PartSolver, ParseError, PuzzleId, PuzzleParser, PuzzleSolver,
    RegistryBuilder, SolveError,
};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 1)]
#[puzzle(year = 2016, day = 25, tags = ["macro-test", "aoc-default"])]
struct AdventSolver;

impl PuzzleParser for AdventSolver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for AdventSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 3)]
#[puzzle(event = "ec", year = 2024, day = 20, tags = ["macro-test"])]
struct QuestSolver;

impl PuzzleParser for QuestSolver {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.len())
    }
}

impl PartSolver<1> for QuestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

impl PartSolver<2> for QuestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((*shared * 2).to_string())
    }
}

impl PartSolver<3> for QuestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((*shared * 3).to_string())
    }
}

fn macro_test_registry() -> puzzle_solver::SolverRegistry {
    RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .expect("plugins should register")
        .build()
}

#[test]
fn test_plugins_are_collected() {
    let registry = macro_test_registry();
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.get_info(PuzzleId::aoc(2016, 25).unwrap()).map(|i| i.parts),
        Some(1)
    );
    assert_eq!(
        registry.get_info(PuzzleId::ec(2024, 20).unwrap()).map(|i| i.parts),
        Some(3)
    );
}

#[test]
fn test_event_defaults_to_advent_of_code() {
    let plugin = puzzle_solver::inventory::iter::<puzzle_solver::SolverPlugin>()
        .find(|p| p.tags.contains(&"aoc-default"))
        .expect("plugin submitted");
    assert_eq!(plugin.event, Event::AdventOfCode);
    assert_eq!((plugin.year, plugin.day), (2016, 25));
}

#[test]
fn test_registered_solvers_run() {
    let registry = macro_test_registry();

    let mut advent = registry
        .create_solver(PuzzleId::aoc(2016, 25).unwrap(), " abc\n")
        .unwrap();
    assert_eq!(advent.solve(1).unwrap().answer, "cba");

    let mut quest = registry
        .create_solver(PuzzleId::ec(2024, 20).unwrap(), "abcd")
        .unwrap();
    let answers: Vec<String> = (1..=3).map(|p| quest.solve(p).unwrap().answer).collect();
    assert_eq!(answers, ["4", "8", "12"]);
}
