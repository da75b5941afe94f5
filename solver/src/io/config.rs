//! Solver configuration stored in `aoc.toml` at the project root.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, relative to the working directory.
pub const CONFIG_FILE: &str = "aoc.toml";

/// Solver configuration (TOML).
///
/// Missing fields fall back to the layout `day<N>/input.txt` under the
/// project root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    /// Directory holding the per-day input directories, relative to the root.
    pub input_dir: PathBuf,

    /// Input file name inside each day directory.
    pub input_file: String,

    /// Day directories are named `<prefix><N>`.
    pub day_dir_prefix: String,

    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            input_file: "input.txt".to_string(),
            day_dir_prefix: "day".to_string(),
            output: OutputConfig::default(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(anyhow!("input_dir must be non-empty"));
        }
        if self.input_file.trim().is_empty() {
            return Err(anyhow!("input_file must be non-empty"));
        }
        if self.input_file.contains(['/', '\\']) {
            return Err(anyhow!("input_file must be a bare file name"));
        }
        if self.day_dir_prefix.trim().is_empty() {
            return Err(anyhow!("day_dir_prefix must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SolverConfig::default()`.
pub fn load_config(path: &Path) -> Result<SolverConfig> {
    if !path.exists() {
        let cfg = SolverConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SolverConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SolverConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Write the default config unless one exists and `force` is unset.
pub fn init_config(path: &Path, force: bool) -> Result<SolverConfig> {
    if path.exists() && !force {
        return Err(anyhow!(
            "aoc init: {} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    let cfg = SolverConfig::default();
    write_config(path, &cfg)?;
    Ok(cfg)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
