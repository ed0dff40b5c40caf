//! Draw detection and game status tests.

use crate::board::{Board, BoardBuilder, Color, GameStatus, Piece, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_starting_position_in_progress() {
    let mut board = Board::new();
    assert_eq!(board.game_status(), GameStatus::InProgress);
    assert!(!board.is_insufficient_material());
}

#[test]
fn test_two_kings_draw_even_with_moves_available() {
    let mut board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("e5"), Color::Black, Piece::King)
        .build()
        .unwrap();

    assert!(!board.generate_moves().is_empty());
    assert!(board.is_insufficient_material());
    assert_eq!(board.game_status(), GameStatus::Draw);
}

#[test]
fn test_lone_pawn_is_sufficient() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("b2"), Color::White, Piece::Pawn)
        .piece(sq("e5"), Color::Black, Piece::King)
        .build()
        .unwrap();

    assert!(!board.is_insufficient_material());
}

#[test]
fn test_major_pieces_are_sufficient() {
    let rook = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("b1"), Color::White, Piece::Rook)
        .piece(sq("e5"), Color::Black, Piece::King)
        .build()
        .unwrap();
    assert!(!rook.is_insufficient_material());

    let queen = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("b1"), Color::White, Piece::Queen)
        .piece(sq("e5"), Color::Black, Piece::King)
        .build()
        .unwrap();
    assert!(!queen.is_insufficient_material());
}

#[test]
fn test_bishop_and_knight_is_sufficient() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("b1"), Color::White, Piece::Bishop)
        .piece(sq("c1"), Color::White, Piece::Knight)
        .piece(sq("e5"), Color::Black, Piece::King)
        .build()
        .unwrap();

    assert!(!board.is_insufficient_material());
}

#[test]
fn test_two_bishops_is_sufficient() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("b1"), Color::White, Piece::Bishop)
        .piece(sq("c1"), Color::White, Piece::Bishop)
        .piece(sq("e5"), Color::Black, Piece::King)
        .build()
        .unwrap();

    assert!(!board.is_insufficient_material());
}

#[test]
fn test_three_knights_is_sufficient() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("b1"), Color::White, Piece::Knight)
        .piece(sq("c1"), Color::White, Piece::Knight)
        .piece(sq("d1"), Color::White, Piece::Knight)
        .piece(sq("e5"), Color::Black, Piece::King)
        .build()
        .unwrap();

    assert!(!board.is_insufficient_material());
}

#[test]
fn test_two_knights_is_insufficient() {
    let mut board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("b1"), Color::White, Piece::Knight)
        .piece(sq("c1"), Color::White, Piece::Knight)
        .piece(sq("e5"), Color::Black, Piece::King)
        .build()
        .unwrap();

    assert!(board.is_insufficient_material());
    assert_eq!(board.game_status(), GameStatus::Draw);
}

#[test]
fn test_lone_minor_each_side_is_draw() {
    let mut board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("b1"), Color::White, Piece::Bishop)
        .piece(sq("e5"), Color::Black, Piece::King)
        .piece(sq("d5"), Color::Black, Piece::Knight)
        .build()
        .unwrap();

    assert!(board.is_insufficient_material());
    assert_eq!(board.game_status(), GameStatus::Draw);
}

#[test]
fn test_one_sufficient_side_keeps_game_alive() {
    let mut board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("b1"), Color::White, Piece::Rook)
        .piece(sq("e5"), Color::Black, Piece::King)
        .build()
        .unwrap();

    assert!(!board.is_insufficient_material());
    assert_eq!(board.game_status(), GameStatus::InProgress);
}

#[test]
fn test_checkmate_status() {
    let mut board = BoardBuilder::new()
        .piece(sq("a5"), Color::Black, Piece::King)
        .piece(sq("b4"), Color::White, Piece::Queen)
        .piece(sq("b3"), Color::White, Piece::King)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
    assert_eq!(board.game_status(), GameStatus::Checkmate);
}

#[test]
fn test_stalemate_status() {
    let mut board = BoardBuilder::new()
        .piece(sq("a5"), Color::Black, Piece::King)
        .piece(sq("c4"), Color::White, Piece::Queen)
        .piece(sq("e1"), Color::White, Piece::King)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
    assert_eq!(board.game_status(), GameStatus::Stalemate);
}

#[test]
fn test_insufficient_material_outranks_stalemate() {
    // Black is stalemated, but neither side could ever mate anyway.
    let mut board = BoardBuilder::new()
        .piece(sq("a5"), Color::Black, Piece::King)
        .piece(sq("b3"), Color::White, Piece::King)
        .piece(sq("c3"), Color::White, Piece::Knight)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    assert!(board.is_stalemate());
    assert!(board.is_insufficient_material());
    assert_eq!(board.game_status(), GameStatus::Draw);
}
