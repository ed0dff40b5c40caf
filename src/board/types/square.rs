//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the 5x5 board, stored as a bitboard index.
///
/// Indices run a1=0, b1=1, ..., e1=4, a2=5, ..., e5=24: rank = index / 5,
/// file = index % 5, files increasing within a rank, ranks increasing upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board
    pub const COUNT: usize = 25;

    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 5 && file < 5 {
            Some(Square((rank * 5 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from an index (0-24)
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::COUNT);
        Square(index as u8)
    }

    /// Get the rank (0-4, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0 as usize / 5
    }

    /// Get the file (0-4, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0 as usize % 5
    }

    /// Get the square's index (0-24)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Offset the square by a signed index delta, returning `None` off-board.
    ///
    /// Callers use whole-rank steps (multiples of 5), so no file wraparound
    /// check is needed.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, delta: isize) -> Option<Self> {
        let idx = self.0 as isize + delta;
        if (0..Self::COUNT as isize).contains(&idx) {
            Some(Square(idx as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 5 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 5 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square((rank * 5 + file) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match chars[0] {
            'a'..='e' => chars[0] as usize - 'a' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let rank = match chars[1] {
            '1'..='5' => chars[1] as usize - '1' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square((rank * 5 + file) as u8))
    }
}
