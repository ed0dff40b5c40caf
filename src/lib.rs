pub mod board;

pub use board::{Bitboard, Board, BoardBuilder, Color, GameStatus, Move, MoveList, Piece, Square};
