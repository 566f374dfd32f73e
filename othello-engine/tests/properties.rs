//! Randomized checks over positions reached by legal play.

use othello_engine::bitboard::Bitboard;
use othello_engine::{BoardEngine, CellState, Direction, Location, Player};
use proptest::prelude::*;

/// Play from the opening, picking the `choice % n`-th legal move each ply.
/// Stops early if the player to move is stuck.
fn play_out(choices: &[usize]) -> BoardEngine {
    let mut engine = BoardEngine::new();
    for &choice in choices {
        let moves: Vec<Location> = engine.legal_moves().collect();
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice % moves.len()];
        engine.play(mv).unwrap();
    }
    engine
}

/// The per-direction walk written out on coordinates, independent of the bitboard shifts.
fn brackets_by_walking(engine: &BoardEngine, x: i32, y: i32) -> bool {
    let me = engine.current_turn();
    let owner = |x, y| engine.get_cell(x, y).owner();

    Direction::ALL.iter().any(|dir| {
        let (dx, dy) = dir.delta();
        let (dx, dy) = (i32::from(dx), i32::from(dy));
        let (mut px, mut py) = (x + dx, y + dy);
        if owner(px, py) != Some(!me) {
            return false;
        }
        while owner(px, py) == Some(!me) {
            px += dx;
            py += dy;
        }
        owner(px, py) == Some(me)
    })
}

fn all_locations() -> impl Iterator<Item = Location> {
    (0..64).map(Location::from_index)
}

proptest! {
    #[test]
    fn move_list_matches_legality(choices in prop::collection::vec(any::<usize>(), 0..40)) {
        let engine = play_out(&choices);
        let moves = engine.legal_moves();
        for loc in all_locations() {
            prop_assert_eq!(moves.contains(loc), engine.is_legal(loc), "at {}", loc);
        }
    }

    #[test]
    fn legality_matches_directional_walk(choices in prop::collection::vec(any::<usize>(), 0..40)) {
        let engine = play_out(&choices);
        for x in 1..=8 {
            for y in 1..=8 {
                let expected = engine.get_cell(x, y) == CellState::Empty
                    && brackets_by_walking(&engine, x, y);
                prop_assert_eq!(engine.is_legal_move(x, y), expected, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn any_integer_is_handled(x in any::<i32>(), y in any::<i32>()) {
        let mut engine = BoardEngine::new();
        let on_board = (1..=8).contains(&x) && (1..=8).contains(&y);
        let legal = engine.is_legal_move(x, y);
        if !on_board {
            prop_assert!(!legal);
            prop_assert_eq!(engine.get_cell(x, y), CellState::Empty);
        }
        prop_assert_eq!(engine.apply_move(x, y), legal);
    }

    #[test]
    fn illegal_moves_leave_engine_untouched(
        choices in prop::collection::vec(any::<usize>(), 0..40),
        x in -2i32..11,
        y in -2i32..11,
    ) {
        let mut engine = play_out(&choices);
        prop_assume!(!engine.is_legal_move(x, y));
        let before = engine;
        prop_assert!(!engine.apply_move(x, y));
        prop_assert_eq!(engine, before);
    }

    #[test]
    fn legal_moves_flip_and_pass_the_turn(choices in prop::collection::vec(any::<usize>(), 0..40)) {
        let mut engine = play_out(&choices);
        let moves: Vec<Location> = engine.legal_moves().collect();
        prop_assume!(!moves.is_empty());

        let mover = engine.current_turn();
        let mv = moves[choices.len() % moves.len()];
        let before = *engine.board();
        let flipped = engine.play(mv).unwrap();

        prop_assert!(!flipped.is_empty());
        prop_assert_eq!(engine.current_turn(), !mover);
        prop_assert_eq!(engine.cell(mv), mover.cell());
        prop_assert_eq!(
            engine.board().count(mover),
            before.count(mover) + flipped.count_occupied() + 1
        );
        prop_assert_eq!(
            engine.board().count(!mover),
            before.count(!mover) - flipped.count_occupied()
        );
        let black = engine.board().pieces(Player::Black);
        let white = engine.board().pieces(Player::White);
        prop_assert!(!black.intersects(white));
        prop_assert_eq!(flipped & before.pieces(!mover), flipped);
        prop_assert_eq!(flipped & before.pieces(mover), Bitboard::default());
    }
}
