//! CLI command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::case::{CaseFile, discover_cases};
use crate::run::{RunOutcome, run_case};

fn cases_dir(repo_root: &Path) -> PathBuf {
    repo_root.join("eval").join("cases")
}

/// List all available cases.
pub fn list_cases(repo_root: &Path) -> Result<()> {
    for (_, case) in discover_cases(&cases_dir(repo_root))? {
        match &case.case.description {
            Some(description) => {
                println!("{} (day {}): {}", case.case.id, case.case.day, description);
            }
            None => println!("{} (day {})", case.case.id, case.case.day),
        }
    }
    Ok(())
}

/// Run a case by id. Returns whether every check passed.
pub fn run_case_by_id(repo_root: &Path, case_id: &str) -> Result<bool> {
    let case_path = cases_dir(repo_root).join(format!("{case_id}.toml"));
    if !case_path.exists() {
        bail!("case {} not found at {}", case_id, case_path.display());
    }
    let case = CaseFile::load(&case_path).context("load case")?;
    debug!(case_id, "case loaded");
    let outcome = run_case(&case_path, &case).context("run case")?;
    print_outcome(&outcome);
    Ok(outcome.passed())
}

/// Run every case. Returns whether all of them passed.
pub fn run_all_cases(repo_root: &Path) -> Result<bool> {
    let cases = discover_cases(&cases_dir(repo_root))?;
    let mut failed = 0usize;
    for (path, case) in &cases {
        let outcome = run_case(path, case).with_context(|| format!("run case {}", case.case.id))?;
        print_outcome(&outcome);
        if !outcome.passed() {
            failed += 1;
        }
    }
    println!("summary: cases={} fail={}", cases.len(), failed);
    Ok(failed == 0)
}

fn print_outcome(outcome: &RunOutcome) {
    for check in &outcome.checks {
        let status = if check.passed() { "pass" } else { "fail" };
        match &check.actual {
            Ok(actual) => println!(
                "{}: case={} part={} expected={} actual={}",
                status, outcome.case_id, check.part, check.expected, actual
            ),
            Err(err) => println!(
                "{}: case={} part={} expected={} error={}",
                status, outcome.case_id, check.part, check.expected, err
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("..")
    }

    #[test]
    fn shipped_cases_all_pass() {
        let cases = discover_cases(&cases_dir(&repo_root())).expect("discover");
        assert!(cases.len() >= 7);
        for (path, case) in &cases {
            let outcome = run_case(path, case).expect("run");
            assert!(outcome.passed(), "case {} failed: {:?}", case.case.id, outcome.checks);
        }
    }

    #[test]
    fn unknown_case_id_is_an_error() {
        let err = run_case_by_id(&repo_root(), "no-such-case").expect_err("missing");
        assert!(err.to_string().contains("no-such-case"));
    }
}
