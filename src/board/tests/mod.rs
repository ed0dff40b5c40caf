//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `bitboard.rs` - Bit-scan, popcount, and mask sanity
//! - `movegen.rs` - Move generation and attack detection
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `draw.rs` - Game status and insufficient-material detection
//! - `perft.rs` - Node-count tests for move generation
//! - `edge_cases.rs` - Parsing, rendering, and encoding edge cases
//! - `proptest.rs` - Property-based tests

mod draw;
mod perft;
