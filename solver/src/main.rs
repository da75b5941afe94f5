//! `aoc`: daily puzzle solvers.
//!
//! Reads each day's input from `day<N>/input.txt` (configurable through
//! `aoc.toml`) and prints both answers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use solver::core::types::Day;
use solver::exit_codes;
use solver::io::config::{CONFIG_FILE, OutputFormat, SolverConfig, init_config, load_config};
use solver::io::input::available_days;
use solver::puzzles;
use solver::solve::{DayReport, SolveOutcome, solve_available, solve_day};

#[derive(Parser)]
#[command(name = "aoc", version, about = "Daily puzzle solvers")]
struct Cli {
    /// Config file; inputs are resolved relative to its directory.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List implemented days and whether their input file exists.
    List,
    /// Solve one day.
    Solve {
        /// Day number.
        day: Day,
        /// Read this file instead of the configured input path.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print answers as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Solve every day that has an input file.
    All {
        /// Print answers as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Write a default `aoc.toml`.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    solver::logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::List => {
            let (cfg, root) = load(&cli.config)?;
            cmd_list(&cfg, &root)
        }
        Command::Solve { day, input, json } => {
            let (cfg, root) = load(&cli.config)?;
            let format = output_format(&cfg, json);
            cmd_solve(&cfg, &root, day, input.as_deref(), format)
        }
        Command::All { json } => {
            let (cfg, root) = load(&cli.config)?;
            let format = output_format(&cfg, json);
            cmd_all(&cfg, &root, format)
        }
    }
}

fn load(config: &Path) -> Result<(SolverConfig, PathBuf)> {
    let cfg = load_config(config)?;
    let root = project_root(config)?;
    debug!(root = %root.display(), config = %config.display(), "config loaded");
    Ok((cfg, root))
}

fn cmd_init(config: &Path, force: bool) -> Result<i32> {
    init_config(config, force)?;
    println!("wrote {}", config.display());
    Ok(exit_codes::OK)
}

fn cmd_list(cfg: &SolverConfig, root: &Path) -> Result<i32> {
    let available = available_days(cfg, root);
    for day in Day::all() {
        let status = if available.contains(&day) {
            "present"
        } else {
            "missing"
        };
        println!("day {day}: {} (input {status})", puzzles::title(day));
    }
    Ok(exit_codes::OK)
}

fn cmd_solve(
    cfg: &SolverConfig,
    root: &Path,
    day: Day,
    input: Option<&Path>,
    format: OutputFormat,
) -> Result<i32> {
    match solve_day(cfg, root, day, input)? {
        SolveOutcome::Solved(report) => {
            print_reports(std::slice::from_ref(&report), format)?;
            Ok(exit_codes::OK)
        }
        SolveOutcome::MissingInput { day, path } => {
            eprintln!("day {day}: no input at {}", path.display());
            Ok(exit_codes::MISSING_INPUT)
        }
    }
}

fn cmd_all(cfg: &SolverConfig, root: &Path, format: OutputFormat) -> Result<i32> {
    let reports = solve_available(cfg, root)?;
    print_reports(&reports, format)?;
    Ok(exit_codes::OK)
}

fn print_reports(reports: &[DayReport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                println!("day {}: {}", report.day, report.answers);
            }
        }
        OutputFormat::Json => {
            println!("{}", to_json(reports)?);
        }
    }
    Ok(())
}

/// A single report serializes as an object, several as an array.
fn to_json(reports: &[DayReport]) -> Result<String> {
    fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).context("serialize answers json")
    }
    match reports {
        [single] => render(single),
        many => render(many),
    }
}

fn output_format(cfg: &SolverConfig, json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        cfg.output.format
    }
}

/// Inputs live next to the config file; a bare file name means the cwd.
fn project_root(config: &Path) -> Result<PathBuf> {
    match config.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        Some(parent) => Ok(parent.to_path_buf()),
        None => std::env::current_dir().context("resolve current directory"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_solve_with_input() {
        let cli = Cli::parse_from(["aoc", "solve", "5", "--input", "x.txt"]);
        let Command::Solve { day, input, json } = cli.command else {
            panic!("expected solve command");
        };
        assert_eq!(day.number(), 5);
        assert_eq!(input, Some(PathBuf::from("x.txt")));
        assert!(!json);
    }

    #[test]
    fn parse_rejects_unknown_day() {
        assert!(Cli::try_parse_from(["aoc", "solve", "9"]).is_err());
        assert!(Cli::try_parse_from(["aoc", "solve", "nine"]).is_err());
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["aoc", "all", "--config", "puzzles/aoc.toml"]);
        assert_eq!(cli.config, PathBuf::from("puzzles/aoc.toml"));
        assert!(matches!(cli.command, Command::All { json: false }));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["aoc", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn project_root_is_config_parent() {
        let root = project_root(Path::new("puzzles/aoc.toml")).expect("root");
        assert_eq!(root, PathBuf::from("puzzles"));
    }

    #[test]
    fn json_flag_overrides_config_format() {
        let cfg = SolverConfig::default();
        assert_eq!(output_format(&cfg, true), OutputFormat::Json);
        assert_eq!(output_format(&cfg, false), OutputFormat::Text);
    }
}
