//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use puzzle_solver::{Event, PuzzleId, SolverPlugin};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Event filter (None = all events)
    pub event_filter: Option<Event>,
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags a solver must all carry
    pub tags: Vec<String>,
    /// Root of the input directory tree
    pub input_dir: PathBuf,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = match args.threads {
            Some(0) => return Err(CliError::Config("--threads must be at least 1".to_string())),
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            event_filter: args.event,
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags.into_iter().filter(|t| !t.is_empty()).collect(),
            input_dir: expand_tilde(&args.input_dir),
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }

    /// Whether the event/year/day filters select `id`
    pub fn selects(&self, id: PuzzleId) -> bool {
        self.event_filter.is_none_or(|e| e == id.event)
            && self.year_filter.is_none_or(|y| y == id.year)
            && self.day_filter.is_none_or(|d| d == id.day)
    }

    /// Whether a plugin belongs to the selected event and carries every requested tag
    pub fn accepts(&self, plugin: &SolverPlugin) -> bool {
        self.event_filter.is_none_or(|event| plugin.event == event)
            && self.tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(std::iter::once("puzzle").chain(argv.iter().copied())).unwrap();
        Config::from_args(args).unwrap()
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
        assert_eq!(expand_tilde(Path::new("/abs/dir")), PathBuf::from("/abs/dir"));
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
    }

    #[test]
    fn test_filters_select_ids() {
        let cfg = config(&["--event", "aoc", "--year", "2015", "--input-dir", "/tmp"]);
        assert!(cfg.selects(PuzzleId::aoc(2015, 3).unwrap()));
        assert!(!cfg.selects(PuzzleId::aoc(2016, 3).unwrap()));
        assert!(!cfg.selects(PuzzleId::ec(2024, 3).unwrap()));

        let all = config(&["--input-dir", "/tmp"]);
        assert!(all.selects(PuzzleId::ec(2024, 1).unwrap()));
    }

    struct Noop;

    impl puzzle_solver::PuzzleParser for Noop {
        type SharedData<'a> = ();

        fn parse<'a>(_: &'a str) -> Result<Self::SharedData<'a>, puzzle_solver::ParseError> {
            Ok(())
        }
    }

    impl puzzle_solver::Solver for Noop {
        const PARTS: u8 = 1;

        fn solve_part(_: &mut (), part: u8) -> Result<String, puzzle_solver::SolveError> {
            Err(puzzle_solver::SolveError::PartNotImplemented(part))
        }
    }

    fn plugin(event: Event, tags: &'static [&'static str]) -> SolverPlugin {
        SolverPlugin {
            event,
            year: 2024,
            day: 1,
            solver: &Noop,
            tags,
        }
    }

    #[test]
    fn test_accepts_plugins_with_every_tag() {
        let cfg = config(&["--tags", "grid,bfs", "--input-dir", "/tmp"]);
        assert!(cfg.accepts(&plugin(Event::AdventOfCode, &["grid", "bfs", "hard"])));
        assert!(cfg.accepts(&plugin(Event::EverybodyCodes, &["bfs", "grid"])));
        assert!(!cfg.accepts(&plugin(Event::AdventOfCode, &["grid"])));
        assert!(!cfg.accepts(&plugin(Event::AdventOfCode, &[])));
    }

    #[test]
    fn test_accepts_checks_event() {
        let cfg = config(&["--event", "ec", "--tags", "grid", "--input-dir", "/tmp"]);
        assert!(cfg.accepts(&plugin(Event::EverybodyCodes, &["grid"])));
        assert!(!cfg.accepts(&plugin(Event::AdventOfCode, &["grid"])));
    }

    #[test]
    fn test_no_tags_accepts_everything() {
        let cfg = config(&["--input-dir", "/tmp"]);
        assert!(cfg.tags.is_empty());
        assert!(cfg.accepts(&plugin(Event::AdventOfCode, &[])));
        assert!(cfg.accepts(&plugin(Event::EverybodyCodes, &["warmup"])));
    }

    #[test]
    fn test_thread_count() {
        assert_eq!(config(&["--threads", "3", "--input-dir", "/tmp"]).thread_count, 3);
        assert!(config(&["--input-dir", "/tmp"]).thread_count >= 1);
        let zero = Args::try_parse_from(["puzzle", "--threads", "0"]).unwrap();
        assert!(Config::from_args(zero).is_err());
    }
}
