//! Case file parsing and validation.
//!
//! Cases are TOML files pairing a puzzle input with expected answers.
//! See `eval/cases/` for examples.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use solver::core::types::{Day, Part};

/// A parsed case file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseFile {
    pub case: CaseMeta,
    #[serde(default)]
    pub expected: Expected,
}

/// Case metadata and the input to solve.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    pub day: Day,
    #[serde(default)]
    pub description: Option<String>,
    /// Inline puzzle input.
    #[serde(default)]
    pub input: Option<String>,
    /// Puzzle input file, relative to the case file.
    #[serde(default)]
    pub input_file: Option<PathBuf>,
}

/// Expected answers; parts left out are not checked.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Expected {
    pub part_one: Option<u64>,
    pub part_two: Option<u64>,
}

impl Expected {
    /// `(part, answer)` for every part with an expectation.
    pub fn parts(&self) -> Vec<(Part, u64)> {
        [(Part::One, self.part_one), (Part::Two, self.part_two)]
            .into_iter()
            .filter_map(|(part, answer)| answer.map(|answer| (part, answer)))
            .collect()
    }
}

impl CaseFile {
    /// Load and validate a case file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read case {}", path.display()))?;
        let case: CaseFile =
            toml::from_str(&contents).with_context(|| format!("parse case {}", path.display()))?;
        case.validate()
            .with_context(|| format!("validate case {}", path.display()))?;
        Ok(case)
    }

    #[cfg(test)]
    pub fn parse_str(contents: &str) -> Result<Self> {
        let case: CaseFile = toml::from_str(contents).context("parse case")?;
        case.validate()?;
        Ok(case)
    }

    /// Resolve the puzzle input; `case_path` anchors `input_file`.
    pub fn read_input(&self, case_path: &Path) -> Result<String> {
        match (&self.case.input, &self.case.input_file) {
            (Some(input), _) => Ok(input.trim().to_string()),
            (None, Some(file)) => {
                let base = case_path.parent().unwrap_or_else(|| Path::new("."));
                solver::io::input::read_input(&base.join(file))
            }
            (None, None) => Err(anyhow!("case {} has no input", self.case.id)),
        }
    }

    fn validate(&self) -> Result<()> {
        validate_case_id(&self.case.id)?;
        match (&self.case.input, &self.case.input_file) {
            (Some(_), Some(_)) => bail!("case.input and case.input_file are mutually exclusive"),
            (None, None) => bail!("case.input or case.input_file is required"),
            (Some(input), None) if input.trim().is_empty() => {
                bail!("case.input must be non-empty")
            }
            (None, Some(file)) if file.as_os_str().is_empty() => {
                bail!("case.input_file must be non-empty")
            }
            _ => {}
        }
        if self.expected.parts().is_empty() {
            bail!("expected must set part_one or part_two");
        }
        Ok(())
    }
}

/// Discover and load all case files from a directory.
///
/// Returns `(path, case)` pairs sorted by id. Errors if duplicate ids are found.
pub fn discover_cases(dir: &Path) -> Result<Vec<(PathBuf, CaseFile)>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut cases = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read cases dir {}", dir.display()))? {
        let entry = entry.context("read case entry")?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        let case = CaseFile::load(&path)?;
        cases.push((path, case));
    }
    cases.sort_by(|(_, left), (_, right)| left.case.id.cmp(&right.case.id));
    for pair in cases.windows(2) {
        if pair[0].1.case.id == pair[1].1.case.id {
            return Err(anyhow!("duplicate case.id {}", pair[0].1.case.id));
        }
    }
    Ok(cases)
}

fn validate_case_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("case.id must be non-empty");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("case.id must use [a-z0-9_-] only");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_case() {
        let input = r#"
[case]
id = "day06-example"
day = 6
description = "published example"
input = """
Time:      7  15   30
Distance:  9  40  200
"""

[expected]
part_one = 288
part_two = 71503
"#;
        let case = CaseFile::parse_str(input).expect("case parses");
        assert_eq!(case.case.id, "day06-example");
        assert_eq!(case.case.day.number(), 6);
        assert_eq!(
            case.expected.parts(),
            vec![(Part::One, 288), (Part::Two, 71503)]
        );
    }

    #[test]
    fn rejects_invalid_id() {
        let input = r#"
[case]
id = "bad/id"
day = 1
input = "12"

[expected]
part_one = 12
"#;
        let err = CaseFile::parse_str(input).expect_err("invalid id");
        assert!(err.to_string().contains("case.id"));
    }

    #[test]
    fn rejects_unknown_day() {
        let input = r#"
[case]
id = "day-nine"
day = 9
input = "x"

[expected]
part_one = 1
"#;
        let _err = CaseFile::parse_str(input).expect_err("unknown day");
    }

    #[test]
    fn rejects_case_without_expectations() {
        let input = r#"
[case]
id = "day01"
day = 1
input = "12"
"#;
        let err = CaseFile::parse_str(input).expect_err("no expectations");
        assert!(err.to_string().contains("expected"));
    }

    #[test]
    fn rejects_both_input_sources() {
        let input = r#"
[case]
id = "day01"
day = 1
input = "12"
input_file = "input.txt"

[expected]
part_one = 12
"#;
        let err = CaseFile::parse_str(input).expect_err("two inputs");
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn input_file_resolves_next_to_case() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("input.txt"), "a1b2\n").expect("write input");
        let case_path = temp.path().join("day01.toml");
        fs::write(
            &case_path,
            "[case]\nid = \"day01\"\nday = 1\ninput_file = \"input.txt\"\n\n[expected]\npart_one = 12\n",
        )
        .expect("write case");
        let case = CaseFile::load(&case_path).expect("load");
        assert_eq!(case.read_input(&case_path).expect("read"), "a1b2");
    }

    #[test]
    fn discover_rejects_duplicate_ids() {
        let temp = tempfile::tempdir().expect("tempdir");
        let body = "[case]\nid = \"same\"\nday = 1\ninput = \"12\"\n\n[expected]\npart_one = 12\n";
        fs::write(temp.path().join("a.toml"), body).expect("write a");
        fs::write(temp.path().join("b.toml"), body).expect("write b");
        let err = discover_cases(temp.path()).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate case.id same"));
    }
}
