//! Error types for the CLI

use puzzle_solver::{PuzzleId, RegistrationError, SolveError, SolverError};
use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    #[error("{id}: {source}")]
    Input {
        id: PuzzleId,
        #[source]
        source: InputError,
    },

    /// Solver lookup or input parsing failed
    #[error("{id}: {source}")]
    Parse {
        id: PuzzleId,
        #[source]
        source: SolverError,
    },

    #[error("{id} part {part}: {source}")]
    Solve {
        id: PuzzleId,
        part: u8,
        #[source]
        source: SolveError,
    },

    #[error("Channel send error")]
    ChannelSend,

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two errors into one `Multiple`, flattening either side
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                v1.iter().chain(v2).cloned().collect()
            }
            (_, ExecutorError::Multiple(v)) => {
                std::iter::once(first).chain(v.iter().cloned()).collect()
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    pub fn combine_opt(existing: Option<ArcExecutorError>, new: ArcExecutorError) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// Merge two optional errors, keeping whichever exist
    pub fn merge(a: Option<ArcExecutorError>, b: Option<ArcExecutorError>) -> Option<ArcExecutorError> {
        match (a, b) {
            (Some(a), Some(b)) => Some(Self::combine(a, b)),
            (a, b) => a.or(b),
        }
    }

    /// Number of leaf errors, counting through `Multiple`
    pub fn count(&self) -> usize {
        match self.inner() {
            ExecutorError::Multiple(v) => v.iter().map(Self::count).sum(),
            _ => 1,
        }
    }
}

/// Errors reading puzzle inputs from disk
#[derive(Error, Debug)]
pub enum InputError {
    #[error("no input file at {}", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
