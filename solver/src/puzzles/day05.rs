//! Day 5: seeds threaded through the almanac's category maps.

use crate::core::remap::{Category, Pipeline, intervals_from_pairs, lowest_start};
use crate::core::text::{paragraphs, parse_all, split_header};
use crate::error::{PuzzleError, PuzzleResult};

pub const TITLE: &str = "If You Give A Seed A Fertilizer";

/// Parsed almanac: the seed line plus the category pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<i64>,
    pub pipeline: Pipeline,
}

impl Almanac {
    pub fn parse(input: &str) -> PuzzleResult<Self> {
        let blocks = paragraphs(input);
        let Some((seed_block, category_blocks)) = blocks.split_first() else {
            return Err(PuzzleError::invalid("almanac", "input is empty"));
        };
        let seeds = parse_seeds(seed_block)?;
        let categories = category_blocks
            .iter()
            .map(|block| Category::parse(block))
            .collect::<PuzzleResult<Vec<_>>>()?;
        Ok(Self {
            seeds,
            pipeline: Pipeline::new(categories),
        })
    }

    /// Lowest location reached by any individual seed.
    pub fn lowest_seed_location(&self) -> PuzzleResult<u64> {
        let lowest = self
            .seeds
            .iter()
            .map(|seed| self.pipeline.convert(*seed))
            .min()
            .ok_or_else(|| PuzzleError::invalid("seeds", "no seeds listed"))?;
        to_answer(lowest)
    }

    /// Lowest location reached by any seed when seeds are `start count` pairs.
    pub fn lowest_range_location(&self) -> PuzzleResult<u64> {
        let ranges = intervals_from_pairs(&self.seeds)?;
        let located = self.pipeline.remap(&ranges);
        let lowest = lowest_start(&located)
            .ok_or_else(|| PuzzleError::invalid("seeds", "no seed ranges listed"))?;
        to_answer(lowest)
    }
}

fn parse_seeds(block: &[&str]) -> PuzzleResult<Vec<i64>> {
    let [line] = block else {
        return Err(PuzzleError::invalid(
            "seeds block",
            format!("expected one line, found {}", block.len()),
        ));
    };
    let (label, values) = split_header(line)?;
    if label != "seeds" {
        return Err(PuzzleError::invalid(
            format!("line '{line}'"),
            "expected 'seeds:'",
        ));
    }
    let seeds: Vec<i64> = parse_all(values, "seeds")?;
    if seeds.is_empty() {
        return Err(PuzzleError::invalid("seeds", "no seeds listed"));
    }
    if let Some(negative) = seeds.iter().find(|seed| **seed < 0) {
        return Err(PuzzleError::invalid(
            format!("seed {negative}"),
            "seeds must be non-negative",
        ));
    }
    Ok(seeds)
}

fn to_answer(location: i64) -> PuzzleResult<u64> {
    u64::try_from(location)
        .map_err(|_| PuzzleError::invalid(format!("location {location}"), "negative location"))
}

pub fn part_one(input: &str) -> PuzzleResult<u64> {
    Almanac::parse(input)?.lowest_seed_location()
}

pub fn part_two(input: &str) -> PuzzleResult<u64> {
    Almanac::parse(input)?.lowest_range_location()
}
