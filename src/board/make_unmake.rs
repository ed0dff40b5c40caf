//! Making and unmaking moves.
//!
//! A move applies as bit toggles on the piece boards paired with one push
//! onto each history stack. Unmaking pops the stacks and toggles the same
//! bits back, restoring the position exactly.

use super::types::{Bitboard, Color, Move, Piece, Square};
use super::Board;

impl Board {
    pub(crate) fn current_color(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq);
        let board = &mut self.pieces[color.index()][piece.index()];
        *board = board.or(bit);
    }

    fn toggle_piece(&mut self, color: Color, piece: Piece, mask: Bitboard) {
        let board = &mut self.pieces[color.index()][piece.index()];
        *board = board.xor(mask);
    }

    /// Scans the twelve piece boards for the occupant of `sq`.
    pub(crate) fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        for color in Color::BOTH {
            for piece in Piece::ALL {
                if self.pieces[color.index()][piece.index()].contains(sq) {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// Applies `m` for the side to move and records it on the history stacks.
    ///
    /// `m` must name an occupied from square (and an occupied to square when
    /// it is a capture); moves coming out of [`Board::generate_moves`] always
    /// do.
    pub fn make_move(&mut self, m: Move) {
        let color = self.current_color();
        let (_, mover) = self.piece_at(m.from()).expect("make_move 'from' empty");

        // Read the victim before any bits move.
        let victim = if m.is_capture() {
            let (_, victim) = self
                .piece_at(m.to())
                .expect("make_move capture target empty");
            Some(victim)
        } else {
            None
        };

        #[cfg(feature = "logging")]
        log::trace!("{color} plays {m}");

        let from_bit = Bitboard::from_square(m.from());
        let to_bit = Bitboard::from_square(m.to());
        self.toggle_piece(color, mover, from_bit.or(to_bit));

        if let Some(victim) = victim {
            self.toggle_piece(color.opponent(), victim, to_bit);
        }
        self.captured.push(victim);

        // A promoted pawn swaps identity on the destination square.
        if let Some(promoted) = m.promotion() {
            self.toggle_piece(color, Piece::Pawn, to_bit);
            self.toggle_piece(color, promoted, to_bit);
        }

        self.moves.push(m);
        self.white_to_move = !self.white_to_move;
    }

    /// Rewinds the most recent move. No-op when the history is empty.
    pub fn unmake_move(&mut self) {
        let Some(m) = self.moves.pop() else {
            return;
        };
        let victim = self.captured.pop().expect("history stacks out of sync");

        // The end square holds the mover, as its post-promotion kind if the
        // move promoted.
        let (color, mover) = self.piece_at(m.to()).expect("unmake_move 'to' empty");

        #[cfg(feature = "logging")]
        log::trace!("{color} takes back {m}");

        let from_bit = Bitboard::from_square(m.from());
        let to_bit = Bitboard::from_square(m.to());
        self.toggle_piece(color, mover, from_bit.or(to_bit));

        if let Some(victim) = victim {
            self.toggle_piece(color.opponent(), victim, to_bit);
        }

        if m.is_promotion() {
            self.toggle_piece(color, mover, from_bit);
            self.toggle_piece(color, Piece::Pawn, from_bit);
        }

        self.white_to_move = !self.white_to_move;
    }
}
