//! Text helpers shared by the puzzle parsers.

use std::str::FromStr;

use crate::error::{PuzzleError, PuzzleResult};

/// Split input into blank-line-delimited paragraphs of non-empty lines.
pub fn paragraphs(input: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in input.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Split `"Label N: rest"` at the first colon.
pub fn split_header(line: &str) -> PuzzleResult<(&str, &str)> {
    line.split_once(':')
        .map(|(head, rest)| (head.trim(), rest.trim()))
        .ok_or_else(|| PuzzleError::invalid(format!("line '{line}'"), "missing ':' separator"))
}

/// Parse one whitespace-free token, naming `context` on failure.
pub fn parse_token<T: FromStr>(token: &str, context: &str) -> PuzzleResult<T> {
    token.parse().map_err(|_| {
        PuzzleError::invalid(
            format!("{context} token '{token}'"),
            "expected a non-negative integer",
        )
    })
}

/// Parse every whitespace-separated token in `text`.
pub fn parse_all<T: FromStr>(text: &str, context: &str) -> PuzzleResult<Vec<T>> {
    text.split_whitespace()
        .map(|token| parse_token(token, context))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let input = "a\nb\n\n\nc\n  \nd\n";
        assert_eq!(paragraphs(input), vec![vec!["a", "b"], vec!["c"], vec!["d"]]);
    }

    #[test]
    fn paragraphs_tolerate_crlf() {
        let input = "a\r\n\r\nb\r\n";
        assert_eq!(paragraphs(input), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn split_header_requires_colon() {
        assert_eq!(split_header("Game 3: 1 red").expect("split"), ("Game 3", "1 red"));
        assert!(split_header("Game 3 1 red").is_err());
    }

    #[test]
    fn parse_all_names_offending_token() {
        let err = parse_all::<u64>("1 2 x3", "seeds").expect_err("bad token");
        assert!(err.to_string().contains("'x3'"));
        assert!(err.to_string().contains("seeds"));
    }
}
