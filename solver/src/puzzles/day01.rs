//! Day 1: calibration values from the first and last digit of each line.

use crate::error::{PuzzleError, PuzzleResult};

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

pub const TITLE: &str = "Trebuchet?!";

pub fn part_one(input: &str) -> PuzzleResult<u64> {
    calibration_sum(input, digit_at)
}

/// Spelled-out digits count too and may overlap (`twone` reads as 2, 1).
pub fn part_two(input: &str) -> PuzzleResult<u64> {
    calibration_sum(input, |line, index| {
        digit_at(line, index).or_else(|| spelled_digit_at(line, index))
    })
}

fn calibration_sum(input: &str, digit: impl Fn(&str, usize) -> Option<u64>) -> PuzzleResult<u64> {
    input
        .trim()
        .lines()
        .map(|line| -> PuzzleResult<u64> {
            let mut digits = (0..line.len()).filter_map(|index| digit(line, index));
            let first = digits.next().ok_or_else(|| {
                PuzzleError::invalid(format!("line '{line}'"), "no digit found")
            })?;
            let last = digits.last().unwrap_or(first);
            Ok(first * 10 + last)
        })
        .sum()
}

fn digit_at(line: &str, index: usize) -> Option<u64> {
    let byte = *line.as_bytes().get(index)?;
    byte.is_ascii_digit().then(|| u64::from(byte - b'0'))
}

fn spelled_digit_at(line: &str, index: usize) -> Option<u64> {
    let rest = line.get(index..)?;
    SPELLED
        .iter()
        .zip(1..)
        .find_map(|(word, value)| rest.starts_with(word).then_some(value))
}
