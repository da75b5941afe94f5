//! Deterministic, pure logic shared by the puzzle solvers.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod remap;
pub mod text;
pub mod types;
