//! Pseudo-legal and legal move generation.
//!
//! Pseudo-legal moves come straight off the attack tables. Legality is
//! settled by playing each candidate, asking whether the mover's king is
//! attacked, and taking it back.

use super::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
use super::types::{Bitboard, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};
use super::Board;

/// Pawns promote on the far rank; only a pawn's own far rank is reachable.
const fn is_promotion_rank(sq: Square) -> bool {
    sq.rank() == 0 || sq.rank() == 4
}

fn push_piece_moves(
    moves: &mut MoveList,
    from: Square,
    attacks: Bitboard,
    own: Bitboard,
    enemy: Bitboard,
) {
    for to in attacks.and(own.not()) {
        if enemy.contains(to) {
            moves.push(Move::capture(from, to));
        } else {
            moves.push(Move::quiet(from, to));
        }
    }
}

impl Board {
    fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        occupied: Bitboard,
        enemy: Bitboard,
        moves: &mut MoveList,
    ) {
        for to in pawn_attacks(color, from).and(enemy) {
            if is_promotion_rank(to) {
                for promo in PROMOTION_PIECES {
                    moves.push(Move::new_promotion_capture(from, to, promo));
                }
            } else {
                moves.push(Move::capture(from, to));
            }
        }

        if let Some(to) = from.offset(color.pawn_push_delta()) {
            if !occupied.contains(to) {
                if is_promotion_rank(to) {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::new_promotion(from, to, promo));
                    }
                } else {
                    moves.push(Move::quiet(from, to));
                }
            }
        }
    }

    fn generate_pseudo_moves(&self) -> MoveList {
        let color = self.current_color();
        let c_idx = color.index();
        let occupied = self.occupied();
        let own = self.occupied_by(color);
        let enemy = self.occupied_by(color.opponent());

        let mut moves = MoveList::new();

        for from in self.pieces[c_idx][Piece::Pawn.index()] {
            self.generate_pawn_moves(from, color, occupied, enemy, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Knight.index()] {
            push_piece_moves(&mut moves, from, knight_attacks(from), own, enemy);
        }
        for from in self.pieces[c_idx][Piece::Bishop.index()] {
            push_piece_moves(&mut moves, from, bishop_attacks(from, occupied), own, enemy);
        }
        for from in self.pieces[c_idx][Piece::Rook.index()] {
            push_piece_moves(&mut moves, from, rook_attacks(from, occupied), own, enemy);
        }
        for from in self.pieces[c_idx][Piece::Queen.index()] {
            push_piece_moves(&mut moves, from, queen_attacks(from, occupied), own, enemy);
        }
        for from in self.pieces[c_idx][Piece::King.index()] {
            push_piece_moves(&mut moves, from, king_attacks(from), own, enemy);
        }

        moves
    }

    /// True iff any piece of `by` attacks `square` under the current
    /// occupancy.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let side = &self.pieces[by.index()];
        let occupied = self.occupied();

        // A pawn of `by` attacks `square` exactly when a pawn of the other
        // color standing on `square` would attack the pawn's square.
        if !pawn_attacks(by.opponent(), square)
            .and(side[Piece::Pawn.index()])
            .is_empty()
        {
            return true;
        }

        if !knight_attacks(square)
            .and(side[Piece::Knight.index()])
            .is_empty()
        {
            return true;
        }

        let diagonal = side[Piece::Bishop.index()].or(side[Piece::Queen.index()]);
        if !bishop_attacks(square, occupied).and(diagonal).is_empty() {
            return true;
        }

        let straight = side[Piece::Rook.index()].or(side[Piece::Queen.index()]);
        if !rook_attacks(square, occupied).and(straight).is_empty() {
            return true;
        }

        !king_attacks(square).and(side[Piece::King.index()]).is_empty()
    }

    pub(crate) fn is_in_check(&self, color: Color) -> bool {
        let kings = self.pieces[color.index()][Piece::King.index()];
        debug_assert!(!kings.is_empty(), "no {color} king on the board");
        self.is_square_attacked(kings.lsb(), color.opponent())
    }

    /// True when the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.current_color())
    }

    /// Tests a pseudo-legal move for self-check. Leaves the board unchanged.
    pub fn is_legal(&mut self, m: Move) -> bool {
        let mover = self.current_color();
        self.make_move(m);
        let legal = !self.is_in_check(mover);
        self.unmake_move();
        legal
    }

    /// All legal moves for the side to move.
    pub fn generate_moves(&mut self) -> MoveList {
        let mover = self.current_color();
        let pseudo_moves = self.generate_pseudo_moves();
        let mut legal_moves = MoveList::new();

        for m in pseudo_moves.iter() {
            self.make_move(*m);
            if !self.is_in_check(mover) {
                legal_moves.push(*m);
            }
            self.unmake_move();
        }
        legal_moves
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.in_check() && self.generate_moves().is_empty()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check() && self.generate_moves().is_empty()
    }

    /// Counts leaf nodes of the legal-move tree at `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves.iter() {
            self.make_move(*m);
            nodes += self.perft(depth - 1);
            self.unmake_move();
        }

        nodes
    }
}
