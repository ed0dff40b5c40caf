//! Textual board rendering.

use std::fmt;

use super::types::{Color, Square};
use super::Board;

/// Renders ranks top-down, five space-separated squares per line: lowercase
/// letters for White, uppercase for Black, `-` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..5).rev() {
            for file in 0..5 {
                let sq = Square::from_index(rank * 5 + file);
                let symbol = match self.piece_at(sq) {
                    Some((Color::White, piece)) => piece.to_char(),
                    Some((Color::Black, piece)) => piece.to_char().to_ascii_uppercase(),
                    None => '-',
                };
                if file > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
