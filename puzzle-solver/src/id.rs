//! Puzzle identification: which event, year and day a solver belongs to

use crate::error::RegistrationError;
use std::fmt;
use std::str::FromStr;

/// Puzzle competition a solver belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Event {
    /// adventofcode.com, 25 days a year since 2015
    AdventOfCode,
    /// everybody.codes, 20 quests a year since 2024
    EverybodyCodes,
}

impl Event {
    pub const ALL: [Event; 2] = [Event::AdventOfCode, Event::EverybodyCodes];

    /// Short code used in attributes, paths and output
    pub const fn code(self) -> &'static str {
        match self {
            Event::AdventOfCode => "aoc",
            Event::EverybodyCodes => "ec",
        }
    }

    pub const fn first_year(self) -> u16 {
        match self {
            Event::AdventOfCode => 2015,
            Event::EverybodyCodes => 2024,
        }
    }

    pub const fn max_day(self) -> u8 {
        match self {
            Event::AdventOfCode => 25,
            Event::EverybodyCodes => 20,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when an event name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown event '{0}' (expected 'aoc' or 'ec')")]
pub struct UnknownEvent(pub String);

impl FromStr for Event {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aoc" | "advent-of-code" | "adventofcode" => Ok(Event::AdventOfCode),
            "ec" | "everybody-codes" | "everybodycodes" => Ok(Event::EverybodyCodes),
            _ => Err(UnknownEvent(s.to_string())),
        }
    }
}

/// Identifies one puzzle: ordered by event, then year, then day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    pub event: Event,
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    /// Create an id, checking year and day against the event's calendar
    pub fn new(event: Event, year: u16, day: u8) -> Result<Self, RegistrationError> {
        if year < event.first_year() || day == 0 || day > event.max_day() {
            return Err(RegistrationError::InvalidPuzzle { event, year, day });
        }
        Ok(Self { event, year, day })
    }

    /// Shorthand for an Advent of Code id
    pub fn aoc(year: u16, day: u8) -> Result<Self, RegistrationError> {
        Self::new(Event::AdventOfCode, year, day)
    }

    /// Shorthand for an Everybody Codes id
    pub fn ec(year: u16, quest: u8) -> Result<Self, RegistrationError> {
        Self::new(Event::EverybodyCodes, year, quest)
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{:02}", self.event, self.year, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_parse_and_display() {
        assert_eq!("aoc".parse::<Event>().unwrap(), Event::AdventOfCode);
        assert_eq!("EC".parse::<Event>().unwrap(), Event::EverybodyCodes);
        assert_eq!("everybody-codes".parse::<Event>().unwrap(), Event::EverybodyCodes);
        assert!("codingame".parse::<Event>().is_err());
        assert_eq!(Event::EverybodyCodes.to_string(), "ec");
    }

    #[test]
    fn test_puzzle_id_validation() {
        assert!(PuzzleId::aoc(2015, 1).is_ok());
        assert!(PuzzleId::aoc(2015, 25).is_ok());
        assert!(PuzzleId::aoc(2014, 1).is_err());
        assert!(PuzzleId::aoc(2015, 0).is_err());
        assert!(PuzzleId::aoc(2015, 26).is_err());
        assert!(PuzzleId::ec(2024, 20).is_ok());
        assert_eq!(
            PuzzleId::ec(2024, 21),
            Err(RegistrationError::InvalidPuzzle {
                event: Event::EverybodyCodes,
                year: 2024,
                day: 21
            })
        );
        assert!(PuzzleId::ec(2023, 1).is_err());
    }

    #[test]
    fn test_puzzle_id_ordering() {
        let mut ids = vec![
            PuzzleId::ec(2024, 1).unwrap(),
            PuzzleId::aoc(2016, 3).unwrap(),
            PuzzleId::aoc(2015, 25).unwrap(),
            PuzzleId::aoc(2016, 1).unwrap(),
        ];
        ids.sort();
        let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["aoc 2015/25", "aoc 2016/01", "aoc 2016/03", "ec 2024/01"]
        );
    }
}
