//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - compact board square representation (u8 index, 0-24)
//! - `Bitboard` - 25-bit board set packed in a u64
//! - `Move` and `MoveList` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use piece::PROMOTION_PIECES;
