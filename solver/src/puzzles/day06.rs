//! Day 6: hold-time windows that beat each race record.

use crate::core::text::{parse_all, parse_token, split_header};
use crate::error::{PuzzleError, PuzzleResult};

pub const TITLE: &str = "Wait For It";

/// The two labelled lines of the race sheet, still unparsed.
struct RaceSheet<'a> {
    times: &'a str,
    distances: &'a str,
}

impl<'a> RaceSheet<'a> {
    fn parse(input: &'a str) -> PuzzleResult<Self> {
        let lines: Vec<&str> = input.trim().lines().collect();
        let [time_line, distance_line] = lines.as_slice() else {
            return Err(PuzzleError::invalid(
                "race sheet",
                format!("expected 2 lines, found {}", lines.len()),
            ));
        };
        Ok(Self {
            times: labelled(*time_line, "Time")?,
            distances: labelled(*distance_line, "Distance")?,
        })
    }
}

fn labelled<'a>(line: &'a str, label: &str) -> PuzzleResult<&'a str> {
    let (head, values) = split_header(line)?;
    if head != label {
        return Err(PuzzleError::invalid(
            format!("line '{line}'"),
            format!("expected '{label}:'"),
        ));
    }
    Ok(values)
}

/// Number of hold times in `0..=duration` whose distance beats `record`.
///
/// Distance `hold * (duration - hold)` is symmetric around `duration / 2`, so
/// the first winning hold fixes the whole window.
pub fn ways_to_win(duration: u64, record: u64) -> u64 {
    (0..=duration)
        .find(|hold| u128::from(*hold) * u128::from(duration - hold) > u128::from(record))
        .map_or(0, |first| duration - 2 * first + 1)
}

/// Product of the winning windows of every race.
pub fn part_one(input: &str) -> PuzzleResult<u64> {
    let sheet = RaceSheet::parse(input)?;
    let times: Vec<u64> = parse_all(sheet.times, "race times")?;
    let records: Vec<u64> = parse_all(sheet.distances, "race records")?;
    if times.len() != records.len() {
        return Err(PuzzleError::invalid(
            "race sheet",
            format!("{} times but {} records", times.len(), records.len()),
        ));
    }
    Ok(times
        .iter()
        .zip(&records)
        .map(|(time, record)| ways_to_win(*time, *record))
        .product())
}

/// Kerning removed: each line's digits form a single race.
pub fn part_two(input: &str) -> PuzzleResult<u64> {
    let sheet = RaceSheet::parse(input)?;
    let time: String = sheet.times.split_whitespace().collect();
    let record: String = sheet.distances.split_whitespace().collect();
    Ok(ways_to_win(
        parse_token(&time, "race time")?,
        parse_token(&record, "race record")?,
    ))
}
