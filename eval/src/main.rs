mod case;
mod cli;
mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "eval", version, about = "Example-case harness for the puzzle solvers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    List,
    Run { case_id: String },
    RunAll,
}

fn main() -> Result<()> {
    solver::logging::init();
    let cli = Cli::parse();
    let repo_root = std::env::current_dir()?;
    let passed = match cli.command {
        Command::List => {
            cli::list_cases(&repo_root)?;
            true
        }
        Command::Run { case_id } => cli::run_case_by_id(&repo_root, &case_id)?,
        Command::RunAll => cli::run_all_cases(&repo_root)?,
    };
    if !passed {
        std::process::exit(solver::exit_codes::INVALID);
    }
    Ok(())
}
