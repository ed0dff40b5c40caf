//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use minichess::board::prelude::*;
//! ```

pub use super::{
    Bitboard, Board, BoardBuilder, BoardError, Color, GameStatus, Move, MoveList, Piece, Square,
    SquareError,
};
