//! Bitboard type and operations.

use super::square::Square;

/// De Bruijn multiplier for the lowest-set-bit scan.
const DEBRUIJN64: u64 = 0x03f7_9d71_b4cb_0a89;

/// Permutation table indexed by the folded De Bruijn product.
#[rustfmt::skip]
const LSB_INDEX: [u8; 64] = [
     0, 47,  1, 56, 48, 27,  2, 60,
    57, 49, 41, 37, 28, 16,  3, 61,
    54, 58, 35, 52, 50, 42, 21, 44,
    38, 32, 29, 23, 17, 11,  4, 62,
    46, 55, 26, 59, 40, 36, 15, 53,
    34, 51, 20, 43, 31, 22, 10, 45,
    25, 39, 14, 33, 19, 30,  9, 24,
    13, 18,  8, 12,  7,  6,  5, 63,
];

/// A 25-square board set packed into the low bits of a u64.
///
/// Bit i corresponds to `Square::from_index(i)`. The high 39 bits are always
/// zero in a well-formed board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

// File masks (columns)
impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0108421);
    pub const FILE_B: Bitboard = Bitboard(0x0210842);
    pub const FILE_C: Bitboard = Bitboard(0x0421084);
    pub const FILE_D: Bitboard = Bitboard(0x0842108);
    pub const FILE_E: Bitboard = Bitboard(0x1084210);

    pub const RANK_1: Bitboard = Bitboard(0x000001F);
    pub const RANK_2: Bitboard = Bitboard(0x00003E0);
    pub const RANK_3: Bitboard = Bitboard(0x0007C00);
    pub const RANK_4: Bitboard = Bitboard(0x00F8000);
    pub const RANK_5: Bitboard = Bitboard(0x1F00000);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(0x1FF_FFFF);
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq.index())
    }

    /// Returns an iterator over the squares set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1 << sq.index())) != 0
    }

    /// Returns the number of set bits (population count)
    ///
    /// Clears the lowest bit per iteration, so the loop runs once per set bit.
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        let mut bits = self.0;
        let mut count = 0;
        while bits != 0 {
            bits &= bits - 1;
            count += 1;
        }
        count
    }

    /// Returns the lowest set square via a De Bruijn multiply-and-shift scan.
    ///
    /// Callers must guard with a nonzero check; a zero bitboard has no lowest
    /// bit.
    #[inline]
    #[must_use]
    pub const fn lsb(self) -> Square {
        debug_assert!(self.0 != 0);
        let folded = (self.0 ^ self.0.wrapping_sub(1)).wrapping_mul(DEBRUIJN64);
        Square::from_index(LSB_INDEX[(folded >> 58) as usize] as usize)
    }

    /// Clears the lowest set bit. No-op on an empty bitboard.
    #[inline]
    #[must_use]
    pub const fn pop_lsb(self) -> Self {
        Bitboard(self.0 & self.0.wrapping_sub(1))
    }

    /// Bitwise AND
    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard(self.0 & other.0)
    }

    /// Bitwise OR
    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Bitboard(self.0 | other.0)
    }

    /// Bitwise XOR
    #[inline]
    #[must_use]
    pub const fn xor(self, other: Self) -> Self {
        Bitboard(self.0 ^ other.0)
    }

    /// Bitwise NOT
    #[inline]
    #[must_use]
    pub const fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

/// Iterator over set squares in a `Bitboard`
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            let sq = self.0.lsb();
            self.0 = self.0.pop_lsb();
            Some(sq)
        }
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> Self::IntoIter {
        BitboardIter(self)
    }
}
