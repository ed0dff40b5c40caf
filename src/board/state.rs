//! Core board state and terminal-position classification.

use super::types::{Bitboard, Color, Move, Piece, Square};

/// How the game stands for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Legal moves remain and mate is still materially possible.
    InProgress,
    /// The side to move has no legal moves and is in check.
    Checkmate,
    /// The side to move has no legal moves but is not in check.
    Stalemate,
    /// Neither side retains enough material to mate.
    Draw,
}

/// A 5x5 board held as one bitboard per color and piece kind.
///
/// Move history lives on the board itself, so [`Board::unmake_move`] rewinds
/// without the caller keeping any undo state. Equality compares placement,
/// side to move, and the history stacks together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) white_to_move: bool,
    pub(crate) moves: Vec<Move>,
    pub(crate) captured: Vec<Option<Piece>>,
}

impl Board {
    /// Sets up the starting position: back ranks RNBQK (a to e) with a full
    /// pawn rank in front of each.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square::from_index(file), Color::White, *piece);
            board.set_piece(Square::from_index(5 + file), Color::White, Piece::Pawn);
            board.set_piece(Square::from_index(15 + file), Color::Black, Piece::Pawn);
            board.set_piece(Square::from_index(20 + file), Color::Black, *piece);
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            white_to_move: true,
            moves: Vec::new(),
            captured: Vec::new(),
        }
    }

    /// Every occupied square on the board.
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied_by(Color::White).or(self.occupied_by(Color::Black))
    }

    /// Squares occupied by `color`.
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        let side = &self.pieces[color.index()];
        let mut all = Bitboard::EMPTY;
        for bb in side {
            all = all.or(*bb);
        }
        all
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.current_color()
    }

    /// The most recent move still on the history stack.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Moves made since the initial position, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    /// Classifies the position for the side to move.
    ///
    /// Insufficient material is checked before move generation, so a dead
    /// position counts as drawn even when legal moves remain.
    pub fn game_status(&mut self) -> GameStatus {
        if self.is_insufficient_material() {
            return GameStatus::Draw;
        }
        if self.generate_moves().is_empty() {
            if self.in_check() {
                return GameStatus::Checkmate;
            }
            return GameStatus::Stalemate;
        }
        GameStatus::InProgress
    }

    /// True when neither side has enough material left to mate.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        !self.side_has_mating_material(Color::White)
            && !self.side_has_mating_material(Color::Black)
    }

    // A side can still mate with any pawn, rook, or queen, with a bishop and
    // knight together, with two bishops, or with three knights.
    fn side_has_mating_material(&self, color: Color) -> bool {
        let side = &self.pieces[color.index()];
        if !side[Piece::Pawn.index()].is_empty()
            || !side[Piece::Rook.index()].is_empty()
            || !side[Piece::Queen.index()].is_empty()
        {
            return true;
        }
        let bishops = side[Piece::Bishop.index()].popcount();
        let knights = side[Piece::Knight.index()].popcount();
        (bishops >= 1 && knights >= 1) || bishops > 1 || knights > 2
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
