//! Per-day puzzle solvers and the registry that dispatches to them.
//!
//! Every solver is a pure function of the trimmed input text.

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;

use crate::core::types::{Answers, Day, Part};
use crate::error::PuzzleResult;

type PartFn = fn(&str) -> PuzzleResult<u64>;

struct Puzzle {
    title: &'static str,
    part_one: PartFn,
    part_two: PartFn,
}

static PUZZLES: [Puzzle; 6] = [
    Puzzle {
        title: day01::TITLE,
        part_one: day01::part_one,
        part_two: day01::part_two,
    },
    Puzzle {
        title: day02::TITLE,
        part_one: day02::part_one,
        part_two: day02::part_two,
    },
    Puzzle {
        title: day03::TITLE,
        part_one: day03::part_one,
        part_two: day03::part_two,
    },
    Puzzle {
        title: day04::TITLE,
        part_one: day04::part_one,
        part_two: day04::part_two,
    },
    Puzzle {
        title: day05::TITLE,
        part_one: day05::part_one,
        part_two: day05::part_two,
    },
    Puzzle {
        title: day06::TITLE,
        part_one: day06::part_one,
        part_two: day06::part_two,
    },
];

fn puzzle(day: Day) -> &'static Puzzle {
    &PUZZLES[usize::from(day.number() - 1)]
}

pub fn title(day: Day) -> &'static str {
    puzzle(day).title
}

pub fn solve_part(day: Day, part: Part, input: &str) -> PuzzleResult<u64> {
    let puzzle = puzzle(day);
    match part {
        Part::One => (puzzle.part_one)(input),
        Part::Two => (puzzle.part_two)(input),
    }
}

pub fn solve(day: Day, input: &str) -> PuzzleResult<Answers> {
    Ok(Answers::new(
        solve_part(day, Part::One, input)?,
        solve_part(day, Part::Two, input)?,
    ))
}
