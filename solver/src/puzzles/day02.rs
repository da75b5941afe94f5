//! Day 2: cube draws per game, checked against a bag limit.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::text::{parse_token, split_header};
use crate::error::{PuzzleError, PuzzleResult};

pub const TITLE: &str = "Cube Conundrum";

static DRAW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) (red|green|blue)$").expect("draw regex is valid"));

/// Bag contents the first part checks against.
const BAG: CubeCounts = CubeCounts {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CubeCounts {
    red: u64,
    green: u64,
    blue: u64,
}

impl CubeCounts {
    fn fits_within(&self, limit: &CubeCounts) -> bool {
        self.red <= limit.red && self.green <= limit.green && self.blue <= limit.blue
    }

    fn max(self, other: CubeCounts) -> CubeCounts {
        CubeCounts {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> u64 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Game {
    id: u64,
    draws: Vec<CubeCounts>,
}

impl Game {
    fn parse(line: &str) -> PuzzleResult<Self> {
        let (head, rest) = split_header(line)?;
        let id = head.strip_prefix("Game").ok_or_else(|| {
            PuzzleError::invalid(format!("line '{line}'"), "expected 'Game <id>:'")
        })?;
        let id: u64 = parse_token(id.trim(), "game id")?;
        let draws = rest
            .split(';')
            .map(parse_draw)
            .collect::<PuzzleResult<Vec<_>>>()?;
        Ok(Self { id, draws })
    }

    /// Fewest cubes of each colour that make every draw possible.
    fn minimum_bag(&self) -> CubeCounts {
        self.draws
            .iter()
            .fold(CubeCounts::default(), |acc, draw| acc.max(*draw))
    }
}

fn parse_draw(draw: &str) -> PuzzleResult<CubeCounts> {
    let mut counts = CubeCounts::default();
    for item in draw.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        let captures = DRAW_RE.captures(item).ok_or_else(|| {
            PuzzleError::invalid(format!("draw '{item}'"), "expected '<count> <colour>'")
        })?;
        let count: u64 = parse_token(&captures[1], "cube count")?;
        match &captures[2] {
            "red" => counts.red += count,
            "green" => counts.green += count,
            "blue" => counts.blue += count,
            other => {
                return Err(PuzzleError::invalid(
                    format!("draw '{item}'"),
                    format!("unknown colour '{other}'"),
                ));
            }
        }
    }
    Ok(counts)
}

fn parse_games(input: &str) -> PuzzleResult<Vec<Game>> {
    input.trim().lines().map(Game::parse).collect()
}

/// Sum of ids of games possible with the fixed bag.
pub fn part_one(input: &str) -> PuzzleResult<u64> {
    Ok(parse_games(input)?
        .iter()
        .filter(|game| game.draws.iter().all(|draw| draw.fits_within(&BAG)))
        .map(|game| game.id)
        .sum())
}

/// Sum of powers of each game's minimum bag.
pub fn part_two(input: &str) -> PuzzleResult<u64> {
    Ok(parse_games(input)?
        .iter()
        .map(|game| game.minimum_bag().power())
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DAY02_EXAMPLE;

    #[test]
    fn part_one_example() {
        assert_eq!(part_one(DAY02_EXAMPLE).expect("solve"), 8);
    }

    #[test]
    fn part_two_example() {
        assert_eq!(part_two(DAY02_EXAMPLE).expect("solve"), 2286);
    }

    #[test]
    fn missing_colour_counts_as_zero_power() {
        assert_eq!(part_two("Game 1: 3 red, 2 green").expect("solve"), 0);
    }

    #[test]
    fn parses_game_draws() {
        let game = Game::parse("Game 12: 3 blue, 4 red; 2 green").expect("parse");
        assert_eq!(game.id, 12);
        assert_eq!(
            game.draws,
            vec![
                CubeCounts {
                    red: 4,
                    green: 0,
                    blue: 3
                },
                CubeCounts {
                    red: 0,
                    green: 2,
                    blue: 0
                },
            ]
        );
    }

    #[test]
    fn repeated_colour_in_draw_accumulates() {
        let counts = parse_draw("5 blue, 1 red, 1 blue").expect("parse");
        assert_eq!(
            counts,
            CubeCounts {
                red: 1,
                green: 0,
                blue: 6
            }
        );
    }

    #[test]
    fn unknown_colour_is_invalid() {
        let err = part_one("Game 1: 3 purple").expect_err("bad colour");
        assert!(err.to_string().contains("'3 purple'"));
    }
}
