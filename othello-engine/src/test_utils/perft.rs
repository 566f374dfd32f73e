//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation and flipping against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html
//!
//! The engine has no pass move, so a position where the player to move is
//! stuck counts as a leaf. Passes first occur at depth 9, so counts up to
//! depth 8 match the published values.

use crate::engine::BoardEngine;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(BoardEngine::new(), depth)
}

fn leaves_below(engine: BoardEngine, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = engine.legal_moves();
    if all_moves.len() == 0 {
        return 1;
    }

    all_moves
        .map(|mv| {
            let mut child = engine;
            match child.play(mv) {
                Ok(_) => leaves_below(child, depth - 1),
                Err(err) => panic!("move list offered {}: {}", mv, err),
            }
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}
