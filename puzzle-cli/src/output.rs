//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print one result: answers to stdout, failures to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match (self.quiet, &result.answer) {
            (true, Ok(answer)) => println!("{}", answer),
            (true, Err(e)) => eprintln!("Error: {}", e),
            (false, Ok(_)) => println!("{}", format_line(result)),
            (false, Err(_)) => eprintln!("{}", format_line(result)),
        }
    }

    /// Totals after all results, with both summed solver time and wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        println!();
        for line in summary_lines(results, self.start_time.elapsed()) {
            println!("{}", line);
        }
    }
}

/// `aoc 2015/01 Part 1: 74 (parse: 12µs, solve: 3µs)`
fn format_line(result: &SolverResult) -> String {
    let prefix = format!("{} Part {}", result.id, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

fn summary_lines(results: &[SolverResult], elapsed: Duration) -> Vec<String> {
    let successes = results.iter().filter(|r| r.answer.is_ok()).count();
    let failures = results.len() - successes;

    let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
    let total_solve_time: TimeDelta = results
        .iter()
        .filter(|r| r.answer.is_ok())
        .map(|r| r.solve_duration)
        .sum();

    let mut lines = vec![
        "--- Summary ---".to_string(),
        format!("Parts: {} solved, {} failed", successes, failures),
        format!("Total parse time: {}", format_duration(total_parse_time)),
        format!("Total solve time: {}", format_duration(total_solve_time)),
        format!("Elapsed wall-clock time: {}", format_std_duration(elapsed)),
    ];
    if !elapsed.is_zero() {
        let compute_secs =
            (total_parse_time + total_solve_time).num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
        lines.push(format!("Speedup factor: {:.2}x", compute_secs / elapsed.as_secs_f64()));
    }
    lines
}

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros as u128)
}

fn format_std_duration(d: Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExecutorError, InputError};
    use puzzle_solver::PuzzleId;
    use std::path::PathBuf;

    fn solved(answer: &str, parse_us: Option<i64>, solve_us: i64) -> SolverResult {
        SolverResult {
            id: PuzzleId::aoc(2015, 1).unwrap(),
            part: 1,
            answer: Ok(answer.to_string()),
            parse_duration: parse_us.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::microseconds(solve_us),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_std_duration(Duration::from_millis(12)), "12.00ms");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(&solved("74", Some(12), 3)),
            "aoc 2015/01 Part 1: 74 (parse: 12µs, solve: 3µs)"
        );
        assert_eq!(format_line(&solved("0", None, 5)), "aoc 2015/01 Part 1: 0 (solve: 5µs)");

        let id = PuzzleId::ec(2024, 2).unwrap();
        let failed = SolverResult {
            id,
            part: 3,
            answer: Err(ExecutorError::Input {
                id,
                source: InputError::Missing {
                    path: PathBuf::from("/in/ec/2024/day02.txt"),
                },
            }
            .into()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        };
        assert_eq!(
            format_line(&failed),
            "ec 2024/02 Part 3: Error - ec 2024/02: no input file at /in/ec/2024/day02.txt"
        );
    }

    #[test]
    fn test_summary_counts() {
        let mut results = vec![solved("1", Some(100), 200), solved("2", None, 300)];
        results.push(SolverResult {
            answer: Err(ExecutorError::ChannelSend.into()),
            ..solved("", None, 0)
        });

        let lines = summary_lines(&results, Duration::from_micros(1200));
        assert_eq!(lines[1], "Parts: 2 solved, 1 failed");
        assert_eq!(lines[2], "Total parse time: 100µs");
        assert_eq!(lines[3], "Total solve time: 500µs");
        assert_eq!(lines[4], "Elapsed wall-clock time: 1.20ms");
        assert_eq!(lines[5], "Speedup factor: 0.50x");

        assert_eq!(summary_lines(&[], Duration::ZERO).len(), 5);
    }
}
