//! Fluent builder for constructing positions.
//!
//! Allows setting up positions piece by piece rather than playing out from
//! the initial setup.
//!
//! # Example
//! ```
//! use minichess::{BoardBuilder, Color, Piece};
//!
//! let board = BoardBuilder::new()
//!     .piece("a1".parse().unwrap(), Color::White, Piece::King)
//!     .piece("e5".parse().unwrap(), Color::Black, Piece::King)
//!     .side_to_move(Color::Black)
//!     .build()
//!     .unwrap();
//! ```

use super::error::BoardError;
use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            builder
                .pieces
                .push((Square::from_index(file), Color::White, piece));
            builder
                .pieces
                .push((Square::from_index(20 + file), Color::Black, piece));
        }
        for file in 0..5 {
            builder
                .pieces
                .push((Square::from_index(5 + file), Color::White, Piece::Pawn));
            builder
                .pieces
                .push((Square::from_index(15 + file), Color::Black, Piece::Pawn));
        }

        builder
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board.
    ///
    /// Fails with [`BoardError::MissingKing`] when either side has no king;
    /// check detection needs one king per side.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }
        board.white_to_move = self.side_to_move == Color::White;

        for color in Color::BOTH {
            if board.pieces[color.index()][Piece::King.index()].is_empty() {
                return Err(BoardError::MissingKing { color });
            }
        }

        Ok(board)
    }
}
