//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use chrono::TimeDelta;
use itertools::Itertools;
use puzzle_solver::{PuzzleId, SolverRegistry};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub id: PuzzleId,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the first part solved from each parsed instance
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(id: PuzzleId, part: u8, error: ArcExecutorError) -> Self {
        Self {
            id,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub id: PuzzleId,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    context: ExecutionContext,
    thread_pool: rayon::ThreadPool,
}

/// Everything a worker thread needs, shared by reference
struct ExecutionContext {
    registry: SolverRegistry,
    inputs: InputStore,
    config: Config,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ArcExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            context: ExecutionContext {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                config: config.clone(),
            },
            thread_pool,
        })
    }

    /// Registered solvers selected by the filters, in puzzle order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let config = &self.context.config;
        self.context
            .registry
            .iter_info()
            .filter(|info| config.selects(info.id))
            .map(|info| WorkItem {
                id: info.id,
                parts: filter_parts(config.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items, streaming one result per part to `tx`
    ///
    /// Every failure is also sent as a result; the returned error collects
    /// them all.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        tracing::debug!(
            work_items = work_items.len(),
            parallelize_by = ?self.context.config.parallelize_by,
            "starting execution"
        );

        match self.context.config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in &work_items {
                    if let Err(e) = run_work(work, &tx, &self.context) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| (w.id.event, w.id.year))
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part differs only inside run_work
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    fn execute_parallel(&self, work_items: Vec<WorkItem>, tx: &Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let context = &self.context;

        self.thread_pool.install(|| {
            work_items
                .par_iter()
                .map(|work| run_work(work, tx, context).err())
                .reduce(|| None, ArcExecutorError::merge)
                .map_or(Ok(()), Err)
        })
    }

    /// Groups run in parallel; items within a group run in order
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let context = &self.context;

        self.thread_pool.install(|| {
            groups
                .par_iter()
                .map(|items| {
                    items
                        .iter()
                        .map(|work| run_work(work, tx, context).err())
                        .fold(None, ArcExecutorError::merge)
                })
                .reduce(|| None, ArcExecutorError::merge)
                .map_or(Ok(()), Err)
        })
    }
}

/// Parts to run given the part filter and the solver's part count
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result).map_err(|_| ExecutorError::ChannelSend.into())
}

/// Send the same failure for every part of `parts`
fn send_failures(
    tx: &Sender<SolverResult>,
    id: PuzzleId,
    parts: RangeInclusive<u8>,
    error: ArcExecutorError,
) -> Result<(), ArcExecutorError> {
    for part in parts {
        send(tx, SolverResult::failed(id, part, error.clone()))?;
    }
    Err(error)
}

/// Read the input for one work item and solve its parts
fn run_work(work: &WorkItem, tx: &Sender<SolverResult>, context: &ExecutionContext) -> Result<(), ArcExecutorError> {
    let input = match context.inputs.read(work.id) {
        Ok(input) => input,
        Err(source) => {
            tracing::warn!(id = %work.id, error = %source, "skipping puzzle without input");
            let error = ExecutorError::Input { id: work.id, source }.into();
            return send_failures(tx, work.id, work.parts.clone(), error);
        }
    };

    if context.config.parallelize_by == ParallelizeBy::Part {
        // each part parses its own instance, so no state is shared between them
        work.parts
            .clone()
            .into_par_iter()
            .map(|part| solve_parts(work.id, part..=part, &input, tx, &context.registry).err())
            .reduce(|| None, ArcExecutorError::merge)
            .map_or(Ok(()), Err)
    } else {
        solve_parts(work.id, work.parts.clone(), &input, tx, &context.registry)
    }
}

/// Parse `input` once and solve `parts` in order against the same instance
fn solve_parts(
    id: PuzzleId,
    parts: RangeInclusive<u8>,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let mut solver = match registry.create_solver(id, input) {
        Ok(solver) => solver,
        Err(source) => {
            tracing::warn!(%id, error = %source, "failed to parse input");
            let error = ExecutorError::Parse { id, source }.into();
            return send_failures(tx, id, parts, error);
        }
    };

    let mut parse_duration = Some(solver.parse_duration());
    let mut failures = None;
    for part in parts {
        let result = match solver.solve(part) {
            Ok(solved) => SolverResult {
                id,
                part,
                solve_duration: solved.duration(),
                answer: Ok(solved.answer),
                parse_duration: parse_duration.take(),
            },
            Err(source) => {
                let error: ArcExecutorError = ExecutorError::Solve { id, part, source }.into();
                failures = Some(ArcExecutorError::combine_opt(failures, error.clone()));
                SolverResult {
                    parse_duration: parse_duration.take(),
                    ..SolverResult::failed(id, part, error)
                }
            }
        };
        send(tx, result)?;
    }
    failures.map_or(Ok(()), Err)
}
