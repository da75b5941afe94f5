//! Stable exit codes for `aoc` commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid puzzle input, invalid config, or any other error.
pub const INVALID: i32 = 1;
/// `aoc solve` found no input file for the requested day.
pub const MISSING_INPUT: i32 = 2;
