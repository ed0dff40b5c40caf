//! Board representation and move generation for 5x5 Gardner minichess.
//!
//! Uses bitboards throughout: leaper attacks come from fixed lookup tables,
//! slider attacks from magic multiply-and-shift lookup, and legality from a
//! make/test/unmake filter over pseudo-legal moves.
//!
//! # Example
//! ```
//! use minichess::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod display;
mod error;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, SquareError};
pub use state::{Board, GameStatus};
pub use types::{Bitboard, BitboardIter, Color, Move, MoveList, MoveListIntoIter, Piece, Square};
