//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::id::{Event, PuzzleId};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Thread-safe factory that parses an input into a ready-to-solve instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub id: PuzzleId,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Parse `input` with `S` and erase the concrete type
pub fn instantiate<'a, S>(id: PuzzleId, input: &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
where
    S: Solver + 'static,
{
    Ok(Box::new(SolverInstance::<S>::new(id, input)?))
}

/// Builder for an immutable [`SolverRegistry`]
///
/// ```
/// use puzzle_solver::{PuzzleId, RegistryBuilder, instantiate};
/// # use puzzle_solver::{PuzzleParser, ParseError, SolveError, Solver};
/// # struct Day1;
/// # impl PuzzleParser for Day1 {
/// #     type SharedData<'a> = &'a str;
/// #     fn parse(input: &str) -> Result<&str, ParseError> { Ok(input) }
/// # }
/// # impl Solver for Day1 {
/// #     const PARTS: u8 = 1;
/// #     fn solve_part(shared: &mut &str, _: u8) -> Result<String, SolveError> {
/// #         Ok(shared.len().to_string())
/// #     }
/// # }
/// let id = PuzzleId::aoc(2015, 1).unwrap();
/// let registry = RegistryBuilder::new()
///     .register(id, 1, move |input| instantiate::<Day1>(id, input))
///     .unwrap()
///     .build();
/// assert_eq!(registry.create_solver(id, "abc").unwrap().solve(1).unwrap().answer, "3");
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<PuzzleId, SolverFactoryEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a factory for a puzzle
    ///
    /// Fails with `DuplicateSolver` if the puzzle already has one.
    pub fn register<F>(mut self, id: PuzzleId, parts: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if self.solvers.contains_key(&id) {
            return Err(RegistrationError::DuplicateSolver(id));
        }
        self.solvers.insert(
            id,
            SolverFactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register every plugin submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`
    ///
    /// ```no_run
    /// # use puzzle_solver::{Event, RegistryBuilder};
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| {
    ///         plugin.event == Event::AdventOfCode && plugin.tags.contains(&"grid")
    ///     })
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                let id = plugin.id()?;
                self = plugin.solver.register_with(self, id)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup from puzzle to solver factory, iterated in puzzle order
pub struct SolverRegistry {
    solvers: BTreeMap<PuzzleId, SolverFactoryEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `id`
    pub fn create_solver<'a>(
        &self,
        id: PuzzleId,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self.solvers.get(&id).ok_or(SolverError::NotFound(id))?;
        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Metadata for every registered solver, ordered by puzzle
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.solvers.iter().map(|(id, entry)| FactoryInfo {
            id: *id,
            parts: entry.parts,
        })
    }

    pub fn get_info(&self, id: PuzzleId) -> Option<FactoryInfo> {
        self.solvers.get(&id).map(|entry| FactoryInfo {
            id,
            parts: entry.parts,
        })
    }

    pub fn contains(&self, id: PuzzleId) -> bool {
        self.solvers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Object-safe registration hook, implemented for every `Solver`
///
/// Lets the plugin table hold solvers of different types side by side.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        id: PuzzleId,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts the solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        id: PuzzleId,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(id, S::PARTS, move |input| instantiate::<S>(id, input))
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Link-time registration record collected with `inventory`
///
/// Normally emitted by `#[derive(AutoRegisterSolver)]`; writing one by
/// hand looks like:
///
/// ```no_run
/// use puzzle_solver::{Event, PuzzleParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Quest1;
///
/// impl PuzzleParser for Quest1 {
///     type SharedData<'a> = ();
///     fn parse(_: &str) -> Result<(), ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Quest1 {
///     const PARTS: u8 = 3;
///     fn solve_part(_: &mut (), part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// puzzle_solver::inventory::submit! {
///     SolverPlugin {
///         event: Event::EverybodyCodes,
///         year: 2024,
///         day: 1,
///         solver: &Quest1,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub event: Event,
    pub year: u16,
    /// Day (Advent of Code) or quest (Everybody Codes) number
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used for filtering
    pub tags: &'static [&'static str],
}

impl SolverPlugin {
    /// Validated puzzle id of this plugin
    pub fn id(&self) -> Result<PuzzleId, RegistrationError> {
        PuzzleId::new(self.event, self.year, self.day)
    }
}

inventory::collect!(SolverPlugin);

/// Register a solver type with a builder variable, panicking on duplicates
///
/// ```
/// use puzzle_solver::{PuzzleId, PuzzleParser, register_solver, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct MyDay1Solver;
///
/// impl PuzzleParser for MyDay1Solver {
///     type SharedData<'a> = ();
///     fn parse(_: &str) -> Result<(), ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for MyDay1Solver {
///     const PARTS: u8 = 1;
///     fn solve_part(_: &mut (), _: u8) -> Result<String, SolveError> {
///         Ok("done".to_string())
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, MyDay1Solver, PuzzleId::aoc(2023, 1).unwrap());
/// let registry = builder.build();
/// assert_eq!(registry.len(), 1);
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $id:expr) => {{
        let id: $crate::PuzzleId = $id;
        $builder = $builder
            .register(id, <$solver as $crate::Solver>::PARTS, move |input: &str| {
                $crate::instantiate::<$solver>(id, input)
            })
            .expect("Failed to register solver");
    }};
}
