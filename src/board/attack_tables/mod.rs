//! Attack tables for move generation.
//!
//! Leaper attacks (pawn, knight, king) are fixed per-square lookups. Slider
//! attacks (bishop, rook, queen) use magic bitboards: the occupancy inside a
//! square's relevant mask is hashed by a multiply-and-shift into a per-square
//! slice of one shared attack vector. Relevant masks span the full rays, edge
//! squares included, so a lookup answers any occupancy directly.

#![allow(clippy::needless_range_loop)] // Index loops are clearer for board coordinates

mod magics;
mod tables;

use once_cell::sync::Lazy;
use std::array::from_fn;

use magics::{BISHOP_MAGICS, ROOK_MAGICS};
use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use super::types::{Bitboard, Color, Square};

#[derive(Clone)]
struct MagicEntry {
    mask: u64,
    magic: u64,
    shift: u8,
    offset: usize,
}

struct MagicTable {
    entries: [MagicEntry; 25],
    attacks: Vec<u64>,
}

impl MagicTable {
    // Every mask has at least four relevant bits, so the shift stays below 64.
    fn attack(&self, square: usize, occupancy: u64) -> u64 {
        let entry = &self.entries[square];
        let occ = occupancy & entry.mask;
        let index = (occ.wrapping_mul(entry.magic) >> entry.shift) as usize;
        self.attacks[entry.offset + index]
    }
}

fn bishop_attacks_on_the_fly(square: usize, occupancy: u64) -> u64 {
    let rank = (square / 5) as i32;
    let file = (square % 5) as i32;
    let mut attacks = 0u64;
    let directions = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
    for (dr, df) in directions {
        let mut r = rank + dr;
        let mut f = file + df;
        while r >= 0 && r < 5 && f >= 0 && f < 5 {
            let sq = (r * 5 + f) as usize;
            attacks |= 1u64 << sq;
            if occupancy & (1u64 << sq) != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

fn rook_attacks_on_the_fly(square: usize, occupancy: u64) -> u64 {
    let rank = (square / 5) as i32;
    let file = (square % 5) as i32;
    let mut attacks = 0u64;
    let directions = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    for (dr, df) in directions {
        let mut r = rank + dr;
        let mut f = file + df;
        while r >= 0 && r < 5 && f >= 0 && f < 5 {
            let sq = (r * 5 + f) as usize;
            attacks |= 1u64 << sq;
            if occupancy & (1u64 << sq) != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

/// Expands an occupancy index back into a subset of `mask`, lowest bit first.
fn set_occupancy(index: usize, bits: usize, mask: u64) -> u64 {
    let mut mask = Bitboard(mask);
    let mut occupancy = 0u64;
    for i in 0..bits {
        let sq = mask.lsb();
        mask = mask.pop_lsb();
        if (index & (1 << i)) != 0 {
            occupancy |= 1u64 << sq.index();
        }
    }
    occupancy
}

fn init_magic_table(is_bishop: bool) -> MagicTable {
    let numbers = if is_bishop {
        &BISHOP_MAGICS
    } else {
        &ROOK_MAGICS
    };

    let mut entries = from_fn(|square| {
        let mask = if is_bishop {
            bishop_attacks_on_the_fly(square, 0)
        } else {
            rook_attacks_on_the_fly(square, 0)
        };
        let relevant_bits = Bitboard(mask).popcount() as u8;
        MagicEntry {
            mask,
            magic: numbers[square],
            shift: 64 - relevant_bits,
            offset: 0,
        }
    });

    let mut attacks: Vec<u64> = Vec::new();
    let mut current_offset = 0usize;

    for square in 0..25 {
        let entry = &mut entries[square];
        entry.offset = current_offset;
        let relevant_bits = 64 - entry.shift as usize;
        let table_size = 1usize << relevant_bits;
        attacks.resize(current_offset + table_size, 0);

        for index in 0..table_size {
            let occupancy = set_occupancy(index, relevant_bits, entry.mask);
            let attack = if is_bishop {
                bishop_attacks_on_the_fly(square, occupancy)
            } else {
                rook_attacks_on_the_fly(square, occupancy)
            };
            let magic_index = (occupancy.wrapping_mul(entry.magic) >> entry.shift) as usize;
            attacks[entry.offset + magic_index] = attack;
        }

        current_offset += table_size;
    }

    MagicTable { entries, attacks }
}

static BISHOP_TABLE: Lazy<MagicTable> = Lazy::new(|| init_magic_table(true));
static ROOK_TABLE: Lazy<MagicTable> = Lazy::new(|| init_magic_table(false));

pub(crate) fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    Bitboard(PAWN_ATTACKS[color.index()][square.index()])
}

pub(crate) fn knight_attacks(square: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[square.index()])
}

pub(crate) fn king_attacks(square: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[square.index()])
}

pub(crate) fn bishop_attacks(square: Square, occupied: Bitboard) -> Bitboard {
    Bitboard(BISHOP_TABLE.attack(square.index(), occupied.0))
}

pub(crate) fn rook_attacks(square: Square, occupied: Bitboard) -> Bitboard {
    Bitboard(ROOK_TABLE.attack(square.index(), occupied.0))
}

pub(crate) fn queen_attacks(square: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(square, occupied).or(rook_attacks(square, occupied))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn occ(squares: &[&str]) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for s in squares {
            bb = bb.or(Bitboard::from_square(sq(s)));
        }
        bb
    }

    #[test]
    fn test_rook_attacks_empty_board() {
        // c3 reaches its whole rank and file
        let attacks = rook_attacks(sq("c3"), Bitboard::EMPTY);
        let expected = Bitboard::FILE_C
            .or(Bitboard::RANK_3)
            .xor(Bitboard::from_square(sq("c3")));
        assert_eq!(attacks, expected);
        assert_eq!(attacks.0, 0x426c84);
    }

    #[test]
    fn test_rook_attacks_blocked() {
        let attacks = rook_attacks(sq("c3"), occ(&["c4"]));
        assert!(attacks.contains(sq("c4"))); // blocker square is reachable
        assert!(!attacks.contains(sq("c5"))); // beyond it is not
        assert_eq!(attacks.0, 0x26c84);
    }

    #[test]
    fn test_rook_attacks_endpoint_blockers() {
        // blockers on ray endpoints leave the attack set unchanged
        let attacks = rook_attacks(sq("c3"), occ(&["a3", "e3", "c1"]));
        assert_eq!(attacks, rook_attacks(sq("c3"), Bitboard::EMPTY));
    }

    #[test]
    fn test_rook_attacks_corner() {
        let empty = rook_attacks(sq("a1"), Bitboard::EMPTY);
        assert_eq!(empty.0, 0x10843e);
        assert_eq!(rook_attacks(sq("a1"), occ(&["a3", "c1"])).0, 0x426);
    }

    #[test]
    fn test_bishop_attacks() {
        assert_eq!(bishop_attacks(sq("c3"), Bitboard::EMPTY).0, 0x1150151);
        assert_eq!(bishop_attacks(sq("c3"), occ(&["d4"])).0, 0x150151);
        assert_eq!(bishop_attacks(sq("a1"), Bitboard::EMPTY).0, 0x1041040);
        assert_eq!(bishop_attacks(sq("a1"), occ(&["c3"])).0, 0x1040);
    }

    #[test]
    fn test_queen_attacks_union() {
        let square = sq("c3");
        let occupied = occ(&["c4", "d4", "b2"]);
        let expected = bishop_attacks(square, occupied).or(rook_attacks(square, occupied));
        assert_eq!(queen_attacks(square, occupied), expected);
        assert_eq!(queen_attacks(square, Bitboard::EMPTY).0, 0x1576dd5);
    }

    #[test]
    fn test_leaper_tables() {
        assert_eq!(knight_attacks(sq("a1")).0, 0x880); // c2 and b3
        assert_eq!(king_attacks(sq("b1")).0, 0xe5);
        assert_eq!(pawn_attacks(Color::White, sq("b2")).0, 0x1400); // a3 and c3
        assert_eq!(pawn_attacks(Color::Black, sq("d4")).0, 0x5000); // c3 and e3
        // pawns on the last rank in their direction attack nothing
        assert_eq!(pawn_attacks(Color::White, sq("c5")), Bitboard::EMPTY);
        assert_eq!(pawn_attacks(Color::Black, sq("c1")), Bitboard::EMPTY);
    }

    #[test]
    fn test_magic_lookup_matches_ray_walk() {
        for (table, is_bishop) in [(&*BISHOP_TABLE, true), (&*ROOK_TABLE, false)] {
            for square in 0..25 {
                let entry = &table.entries[square];
                let bits = 64 - entry.shift as usize;
                for index in 0..(1usize << bits) {
                    let occupancy = set_occupancy(index, bits, entry.mask);
                    let expected = if is_bishop {
                        bishop_attacks_on_the_fly(square, occupancy)
                    } else {
                        rook_attacks_on_the_fly(square, occupancy)
                    };
                    assert_eq!(
                        table.attack(square, occupancy),
                        expected,
                        "square {square} occupancy {occupancy:#x}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_masks_span_full_rays() {
        for square in 0..25 {
            assert_eq!(ROOK_TABLE.entries[square].mask.count_ones(), 8);
            let bishop_bits = BISHOP_TABLE.entries[square].mask.count_ones();
            assert!((4..=8).contains(&bishop_bits));
        }
    }
}
