//! Daily puzzle solvers.
//!
//! Each day parses a small text input and computes two numeric answers. The
//! crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (interval remapping, shared
//!   types, text helpers). No I/O.
//! - **[`puzzles`]**: One pure solver per day plus the registry.
//! - **[`io`]**: Config and input files.
//!
//! [`solve`] coordinates the two to implement the CLI commands.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod puzzles;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
