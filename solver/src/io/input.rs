//! Puzzle input discovery and reading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::types::Day;
use crate::io::config::SolverConfig;

/// Canonical input locations for one day under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub day_dir: PathBuf,
    pub input_path: PathBuf,
}

impl InputPaths {
    pub fn for_day(cfg: &SolverConfig, root: &Path, day: Day) -> Self {
        let day_dir = root
            .join(&cfg.input_dir)
            .join(format!("{}{}", cfg.day_dir_prefix, day.number()));
        let input_path = day_dir.join(&cfg.input_file);
        Self {
            day_dir,
            input_path,
        }
    }
}

/// Read an input file, trimming surrounding whitespace.
pub fn read_input(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading puzzle input");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?;
    Ok(contents.trim().to_string())
}

/// Days whose configured input file exists, ascending.
pub fn available_days(cfg: &SolverConfig, root: &Path) -> Vec<Day> {
    Day::all()
        .filter(|day| InputPaths::for_day(cfg, root, *day).input_path.is_file())
        .collect()
}
