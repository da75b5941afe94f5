//! Shared deterministic types for puzzle solving.
//!
//! These types are the contract between the registry, the orchestration
//! layer and the CLI. They carry no I/O and serialize stably.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

/// Highest day with an implemented solver.
pub const LAST_DAY: u8 = 6;

/// A validated puzzle day in `1..=LAST_DAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(u8);

impl Day {
    pub fn new(number: u8) -> Result<Self, PuzzleError> {
        if (1..=LAST_DAY).contains(&number) {
            Ok(Self(number))
        } else {
            Err(PuzzleError::UnknownDay(number))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Every implemented day in ascending order.
    pub fn all() -> impl Iterator<Item = Day> {
        (1..=LAST_DAY).map(Day)
    }
}

impl TryFrom<u8> for Day {
    type Error = PuzzleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Day::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl FromStr for Day {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s
            .trim()
            .parse()
            .map_err(|_| PuzzleError::invalid(format!("day '{s}'"), "expected a number"))?;
        Day::new(number)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which half of a day's puzzle to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    One,
    Two,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => f.write_str("1"),
            Part::Two => f.write_str("2"),
        }
    }
}

/// Both answers produced by one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub part_one: u64,
    pub part_two: u64,
}

impl Answers {
    pub fn new(part_one: u64, part_two: u64) -> Self {
        Self { part_one, part_two }
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part1={} part2={}", self.part_one, self.part_two)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_rejects_out_of_range() {
        assert_eq!(Day::new(0), Err(PuzzleError::UnknownDay(0)));
        assert_eq!(Day::new(LAST_DAY + 1), Err(PuzzleError::UnknownDay(LAST_DAY + 1)));
    }

    #[test]
    fn day_parses_from_str() {
        let day: Day = " 5 ".parse().expect("parse day");
        assert_eq!(day.number(), 5);
        assert!("five".parse::<Day>().is_err());
    }

    #[test]
    fn all_days_are_ascending() {
        let numbers: Vec<u8> = Day::all().map(Day::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }
}
