//! Deterministic, pure logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod brackets;
pub mod intervals;
pub mod record;
pub mod spiral;
pub mod text_stats;
