//! Day 3: part numbers adjacent to symbols in an engine schematic.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::text::parse_token;
use crate::error::PuzzleResult;

pub const TITLE: &str = "Gear Ratios";

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("number regex is valid"));

/// Numbers attached to each symbol, keyed by `(row, column)`.
type SymbolMap = BTreeMap<(usize, usize), Vec<u64>>;

fn is_symbol(ch: char) -> bool {
    !ch.is_ascii_digit() && ch != '.'
}

/// Character column of byte offset `offset` in `line`.
fn char_column(line: &str, offset: usize) -> usize {
    line[..offset].chars().count()
}

/// Attach every number to each symbol in its 8-neighbourhood.
///
/// Columns count characters, so multibyte symbols occupy one cell.
fn attach_numbers(schematic: &str) -> PuzzleResult<SymbolMap> {
    let rows: Vec<&str> = schematic.trim().lines().map(str::trim_end).collect();
    let mut symbols: SymbolMap = rows
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, ch)| is_symbol(*ch))
                .map(move |(column, _)| ((row, column), Vec::new()))
        })
        .collect();

    for (row, line) in rows.iter().enumerate() {
        for found in NUMBER_RE.find_iter(line) {
            let number: u64 = parse_token(found.as_str(), &format!("row {row}"))?;
            let first = char_column(line, found.start());
            let last = first + found.as_str().chars().count();
            for r in row.saturating_sub(1)..=row + 1 {
                for c in first.saturating_sub(1)..=last {
                    if let Some(attached) = symbols.get_mut(&(r, c)) {
                        attached.push(number);
                    }
                }
            }
        }
    }
    Ok(symbols)
}

/// Sum of every number/symbol adjacency.
pub fn part_one(input: &str) -> PuzzleResult<u64> {
    Ok(attach_numbers(input)?
        .values()
        .map(|numbers| numbers.iter().sum::<u64>())
        .sum())
}

/// Sum of products for symbols touching exactly two numbers.
pub fn part_two(input: &str) -> PuzzleResult<u64> {
    Ok(attach_numbers(input)?
        .values()
        .filter(|numbers| numbers.len() == 2)
        .map(|numbers| numbers.iter().product::<u64>())
        .sum())
}
