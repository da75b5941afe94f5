//! Case execution: solve the case input and compare against expectations.

use std::path::Path;

use anyhow::{Context, Result};
use solver::core::types::Part;
use solver::puzzles;
use tracing::{debug, info, instrument};

use crate::case::CaseFile;

/// Result of checking one part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartCheck {
    pub part: Part,
    pub expected: u64,
    /// Solver answer, or the rendered error if solving failed.
    pub actual: Result<u64, String>,
}

impl PartCheck {
    pub fn passed(&self) -> bool {
        self.actual.as_ref() == Ok(&self.expected)
    }
}

/// Result of running a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub case_id: String,
    pub checks: Vec<PartCheck>,
}

impl RunOutcome {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(PartCheck::passed)
    }
}

/// Run a case: read its input and check every expected part.
///
/// Solver errors are recorded as failed checks rather than aborting.
#[instrument(skip_all, fields(case_id = %case.case.id))]
pub fn run_case(case_path: &Path, case: &CaseFile) -> Result<RunOutcome> {
    let input = case.read_input(case_path).context("read case input")?;
    debug!(day = %case.case.day, bytes = input.len(), "case input loaded");

    let checks: Vec<PartCheck> = case
        .expected
        .parts()
        .into_iter()
        .map(|(part, expected)| PartCheck {
            part,
            expected,
            actual: puzzles::solve_part(case.case.day, part, &input)
                .map_err(|err| err.to_string()),
        })
        .collect();

    let outcome = RunOutcome {
        case_id: case.case.id.clone(),
        checks,
    };
    info!(passed = outcome.passed(), "case finished");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(body: &str) -> CaseFile {
        CaseFile::parse_str(body).expect("case parses")
    }

    #[test]
    fn matching_answers_pass() {
        let case = case(
            "[case]\nid = \"d1\"\nday = 1\ninput = \"a1b2\\nc3d\"\n\n[expected]\npart_one = 45\n",
        );
        let outcome = run_case(Path::new("cases/d1.toml"), &case).expect("run");
        assert!(outcome.passed());
        assert_eq!(outcome.checks.len(), 1);
    }

    #[test]
    fn wrong_answer_fails_with_actual_value() {
        let case = case(
            "[case]\nid = \"d1\"\nday = 1\ninput = \"a1b2\"\n\n[expected]\npart_one = 99\npart_two = 12\n",
        );
        let outcome = run_case(Path::new("cases/d1.toml"), &case).expect("run");
        assert!(!outcome.passed());
        assert_eq!(outcome.checks[0].actual, Ok(12));
        assert!(outcome.checks[1].passed());
    }

    #[test]
    fn solver_error_is_recorded_not_raised() {
        let case = case("[case]\nid = \"d1\"\nday = 1\ninput = \"abc\"\n\n[expected]\npart_one = 1\n");
        let outcome = run_case(Path::new("cases/d1.toml"), &case).expect("run");
        let actual = outcome.checks[0].actual.as_ref().expect_err("solver error");
        assert!(actual.contains("no digit"));
    }
}
