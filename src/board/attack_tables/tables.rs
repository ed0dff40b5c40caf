//! Precomputed attack tables for leaper pieces (knights, kings, pawns).
//!
//! Built once from board geometry at first use. Pawn tables hold the diagonal
//! capture targets only; the forward push is derived in move generation.

use once_cell::sync::Lazy;

pub(super) static KNIGHT_ATTACKS: Lazy<[u64; 25]> = Lazy::new(|| {
    let mut attacks = [0u64; 25];
    let deltas = [
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 5) as isize;
        let f = (sq % 5) as isize;
        let mut mask = 0u64;
        for (dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..5).contains(&nr) && (0..5).contains(&nf) {
                let idx = (nr as usize) * 5 + (nf as usize);
                mask |= 1u64 << idx;
            }
        }
        *slot = mask;
    }
    attacks
});

pub(super) static KING_ATTACKS: Lazy<[u64; 25]> = Lazy::new(|| {
    let mut attacks = [0u64; 25];
    let deltas = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 5) as isize;
        let f = (sq % 5) as isize;
        let mut mask = 0u64;
        for (dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..5).contains(&nr) && (0..5).contains(&nf) {
                let idx = (nr as usize) * 5 + (nf as usize);
                mask |= 1u64 << idx;
            }
        }
        *slot = mask;
    }
    attacks
});

/// Indexed `[color][square]`; White captures toward increasing ranks, Black
/// toward decreasing ranks.
pub(super) static PAWN_ATTACKS: Lazy<[[u64; 25]; 2]> = Lazy::new(|| {
    let mut attacks = [[0u64; 25]; 2];
    for sq in 0..25 {
        let r = (sq / 5) as isize;
        let f = (sq % 5) as isize;
        for (c, dr) in [(0, 1), (1, -1)] {
            let mut mask = 0u64;
            for df in [-1, 1] {
                let nr = r + dr;
                let nf = f + df;
                if (0..5).contains(&nr) && (0..5).contains(&nf) {
                    let idx = (nr as usize) * 5 + (nf as usize);
                    mask |= 1u64 << idx;
                }
            }
            attacks[c][sq] = mask;
        }
    }
    attacks
});
