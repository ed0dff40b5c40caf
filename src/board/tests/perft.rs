//! Perft (performance test) for move generation correctness.

use crate::board::{Board, Square};
use std::time::Instant;

struct TestLine {
    name: &'static str,
    line: &'static [&'static str],
    depths: &'static [(usize, u64)],
}

const TEST_LINES: &[TestLine] = &[
    TestLine {
        name: "Initial Position",
        line: &[],
        depths: &[
            (1, 7),
            (2, 53),
            (3, 506),
            (4, 4775),
            (5, 52512),
            (6, 572874),
        ],
    },
    TestLine {
        name: "Open Center",
        line: &["b2b3", "c4c3", "b3a4", "c3d2", "c1d2", "b5c3"],
        depths: &[(1, 8), (2, 105), (3, 1283), (4, 15806)],
    },
];

fn play(board: &mut Board, text: &str) {
    let from: Square = text[..2].parse().expect("bad square in test line");
    let to: Square = text[2..].parse().expect("bad square in test line");
    let mv = board
        .generate_moves()
        .iter()
        .find(|m| m.from() == from && m.to() == to)
        .copied()
        .unwrap_or_else(|| panic!("move {text} not legal in test line"));
    board.make_move(mv);
}

#[test]
fn test_perft_depth_zero_is_one() {
    let mut board = Board::new();
    assert_eq!(board.perft(0), 1);
}

#[test]
fn test_all_perft_lines() {
    for position in TEST_LINES {
        let mut board = Board::new();
        for text in position.line {
            play(&mut board, text);
        }

        for &(depth, expected) in position.depths {
            let start = Instant::now();
            let nodes = board.perft(depth);
            let duration = start.elapsed();

            println!("  Depth {}: {} nodes in {:?}", depth, nodes, duration);

            assert_eq!(
                nodes, expected,
                "Perft failed for line '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
    }
}

#[test]
fn test_perft_leaves_board_unchanged() {
    let mut board = Board::new();
    let snapshot = board.clone();
    board.perft(4);
    assert_eq!(board, snapshot);
}
