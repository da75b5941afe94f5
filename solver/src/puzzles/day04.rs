//! Day 4: scratchcard matches, points and copy propagation.

use std::collections::HashSet;

use crate::core::text::{parse_all, parse_token, split_header};
use crate::error::{PuzzleError, PuzzleResult};

pub const TITLE: &str = "Scratchcards";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Scratchcard {
    /// `card <id>`, used to name the card in errors.
    context: String,
    winning: HashSet<u64>,
    scratched: HashSet<u64>,
}

impl Scratchcard {
    fn parse(line: &str) -> PuzzleResult<Self> {
        let (head, numbers) = split_header(line)?;
        let id = head.strip_prefix("Card").ok_or_else(|| {
            PuzzleError::invalid(format!("line '{line}'"), "expected 'Card <id>:'")
        })?;
        let id: u64 = parse_token(id.trim(), "card id")?;
        let context = format!("card {id}");
        let (winning, scratched) = numbers
            .split_once('|')
            .ok_or_else(|| PuzzleError::invalid(&context, "missing '|' separator"))?;
        Ok(Self {
            winning: parse_all(winning, &context)?.into_iter().collect(),
            scratched: parse_all(scratched, &context)?.into_iter().collect(),
            context,
        })
    }

    fn matches(&self) -> usize {
        self.winning.intersection(&self.scratched).count()
    }

    /// One point for the first match, doubled for each further match.
    fn points(&self) -> PuzzleResult<u64> {
        match self.matches() {
            0 => Ok(0),
            n => u32::try_from(n - 1)
                .ok()
                .and_then(|exponent| 2u64.checked_pow(exponent))
                .ok_or_else(|| {
                    PuzzleError::invalid(&self.context, format!("{n} matches overflow the score"))
                }),
        }
    }
}

fn parse_cards(input: &str) -> PuzzleResult<Vec<Scratchcard>> {
    input.trim().lines().map(Scratchcard::parse).collect()
}

pub fn part_one(input: &str) -> PuzzleResult<u64> {
    parse_cards(input)?.iter().try_fold(0u64, |total, card| {
        total
            .checked_add(card.points()?)
            .ok_or_else(|| PuzzleError::invalid("scratchcards", "total score overflows"))
    })
}

/// Card `i` with `m` matches wins one copy of each of the next `m` cards per
/// copy held. Copies past the last card are dropped.
pub fn part_two(input: &str) -> PuzzleResult<u64> {
    let cards = parse_cards(input)?;
    let mut copies = vec![1u64; cards.len()];
    for (index, card) in cards.iter().enumerate() {
        let held = copies[index];
        let won = (index + 1)..(index + 1 + card.matches()).min(cards.len());
        for count in &mut copies[won] {
            *count += held;
        }
    }
    Ok(copies.iter().sum())
}
