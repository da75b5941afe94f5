//! Test-only helpers: published example inputs and temporary input trees.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::types::Day;
use crate::io::config::{SolverConfig, write_config};
use crate::io::input::InputPaths;

pub const DAY01_EXAMPLE: &str = "\
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
";

pub const DAY01_SPELLED_EXAMPLE: &str = "\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

pub const DAY02_EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

pub const DAY03_EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

pub const DAY04_EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

pub const DAY05_EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

pub const DAY06_EXAMPLE: &str = "\
Time:      7  15   30
Distance:  9  40  200
";

/// Example input whose answers are valid for both parts.
pub fn example(day: Day) -> &'static str {
    match day.number() {
        1 => DAY01_EXAMPLE,
        2 => DAY02_EXAMPLE,
        3 => DAY03_EXAMPLE,
        4 => DAY04_EXAMPLE,
        5 => DAY05_EXAMPLE,
        _ => DAY06_EXAMPLE,
    }
}

/// A temporary project root with `aoc.toml` and per-day input files.
pub struct InputTree {
    dir: TempDir,
    config: SolverConfig,
}

impl InputTree {
    /// Create an empty root using the default config.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        let config = SolverConfig::default();
        write_config(&dir.path().join("aoc.toml"), &config)?;
        Ok(Self { dir, config })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Write `contents` as the configured input file for `day`.
    pub fn write_input(&self, day: Day, contents: &str) -> Result<()> {
        let paths = InputPaths::for_day(&self.config, self.path(), day);
        fs::create_dir_all(&paths.day_dir)
            .with_context(|| format!("create {}", paths.day_dir.display()))?;
        fs::write(&paths.input_path, contents)
            .with_context(|| format!("write {}", paths.input_path.display()))
    }

    /// Write the published example for every day.
    pub fn write_examples(&self) -> Result<()> {
        for day in Day::all() {
            self.write_input(day, example(day))?;
        }
        Ok(())
    }
}
