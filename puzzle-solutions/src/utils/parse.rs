//! Input parsing helpers shared by the solutions

use puzzle_solver::ParseError;
use regex::{Captures, Regex};
use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

static SIGNED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").unwrap());
static UNSIGNED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

fn numbers<T>(re: &Regex, s: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    re.find_iter(s)
        .map(|m| {
            m.as_str()
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("{:?}: {}", m.as_str(), e)))
        })
        .collect()
}

/// Every integer in `s`, in order; a `-` directly before digits is a sign
///
/// ```
/// use puzzle_solutions::utils::parse::ints;
/// assert_eq!(ints::<i32>("p=3,-4 v=-1,2").unwrap(), vec![3, -4, -1, 2]);
/// ```
pub fn ints<T>(s: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    numbers(&SIGNED, s)
}

/// Every run of digits in `s`; dashes are treated as separators
pub fn unsigned<T>(s: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    numbers(&UNSIGNED, s)
}

/// One value per non-empty line
///
/// Errors name the 1-based line that failed.
pub fn lines_of<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.trim()
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("line {}: {}", i + 1, e)))
        })
        .collect()
}

/// First match of `re` in `line`, or an error naming both
///
/// The match is not anchored; patterns that must cover the whole line carry
/// their own `^...$`.
pub fn captures<'h>(re: &Regex, line: &'h str) -> Result<Captures<'h>, ParseError> {
    re.captures(line).ok_or_else(|| {
        ParseError::InvalidFormat(format!("{:?} does not match /{}/", line, re.as_str()))
    })
}

/// Paragraphs separated by one or more blank lines, without trailing newlines
pub fn blocks(input: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = None;
    let mut end = 0;
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                out.push(&input[s..end]);
            }
        } else {
            start.get_or_insert(offset);
            end = offset + line.trim_end_matches(['\r', '\n']).len();
        }
        offset += line.len();
    }
    if let Some(s) = start {
        out.push(&input[s..end]);
    }
    out
}

/// Flatten an `anyhow` chain into a `ParseError` at the solver boundary
pub fn invalid_format(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{:#}", err))
}
