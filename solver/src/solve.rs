//! Orchestration for `aoc solve` and `aoc all`.
//!
//! Resolves where a day's input lives, reads it, and hands the text to the
//! pure registry in [`crate::puzzles`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::core::types::{Answers, Day};
use crate::io::config::SolverConfig;
use crate::io::input::{InputPaths, read_input};
use crate::puzzles;

/// Answers for one day plus where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub day: Day,
    pub title: &'static str,
    pub input_path: PathBuf,
    pub answers: Answers,
}

/// Structured solve outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(DayReport),
    /// The input file for the day does not exist.
    MissingInput { day: Day, path: PathBuf },
}

/// Solve an in-memory input.
pub fn solve_input(day: Day, input: &str) -> Result<Answers> {
    puzzles::solve(day, input).with_context(|| format!("solve day {day}"))
}

/// Solve `day`, reading `input_override` or the configured input path.
#[instrument(skip_all, fields(day = %day))]
pub fn solve_day(
    cfg: &SolverConfig,
    root: &Path,
    day: Day,
    input_override: Option<&Path>,
) -> Result<SolveOutcome> {
    let input_path = match input_override {
        Some(path) => path.to_path_buf(),
        None => InputPaths::for_day(cfg, root, day).input_path,
    };
    if !input_path.is_file() {
        debug!(path = %input_path.display(), "input file missing");
        return Ok(SolveOutcome::MissingInput {
            day,
            path: input_path,
        });
    }
    let input = read_input(&input_path)?;
    let answers = solve_input(day, &input)?;
    info!(part_one = answers.part_one, part_two = answers.part_two, "day solved");
    Ok(SolveOutcome::Solved(DayReport {
        day,
        title: puzzles::title(day),
        input_path,
        answers,
    }))
}

/// Solve every day whose input exists. Missing inputs are skipped.
pub fn solve_available(cfg: &SolverConfig, root: &Path) -> Result<Vec<DayReport>> {
    let mut reports = Vec::new();
    for day in Day::all() {
        match solve_day(cfg, root, day, None)? {
            SolveOutcome::Solved(report) => reports.push(report),
            SolveOutcome::MissingInput { day, path } => {
                warn!(day = %day, path = %path.display(), "skipping day without input");
            }
        }
    }
    Ok(reports)
}
