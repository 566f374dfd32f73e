//! C bindings for [`BoardEngine`].
//!
//! Two styles are offered: stateless functions over plain `u64` color masks,
//! and an engine handed out as an opaque pointer. Cells and turns are encoded
//! as `0` for empty, `1` for black and `2` for white.

use crate::bitboard::{self, Bitboard};
use crate::board::Board;
use crate::engine::BoardEngine;
use crate::player::{CellState, Player};

const CELL_EMPTY: u8 = 0;
const CELL_BLACK: u8 = 1;
const CELL_WHITE: u8 = 2;

fn encode_cell(cell: CellState) -> u8 {
    match cell {
        CellState::Empty => CELL_EMPTY,
        CellState::Black => CELL_BLACK,
        CellState::White => CELL_WHITE,
    }
}

fn decode_player(turn: u8) -> Option<Player> {
    match turn {
        CELL_BLACK => Some(Player::Black),
        CELL_WHITE => Some(Player::White),
        _ => None,
    }
}

#[repr(C)]
#[derive(Debug, PartialEq)]
pub struct ApplyMoveResult {
    pub black_mask: u64,
    pub white_mask: u64,
    pub applied: bool,
}

/// Mask of the legal moves for the player owning `active_mask`.
#[no_mangle]
pub extern "C" fn othello_get_move_mask(active_mask: u64, opponent_mask: u64) -> u64 {
    bitboard::get_move_mask(Bitboard::from(active_mask), Bitboard::from(opponent_mask)).into()
}

/// Play `turn` at `(x, y)` on the board given by two color masks.
/// An illegal move, an unknown turn or overlapping masks return the masks
/// unchanged with `applied` false.
#[no_mangle]
pub extern "C" fn othello_apply_move(
    black_mask: u64,
    white_mask: u64,
    turn: u8,
    x: i32,
    y: i32,
) -> ApplyMoveResult {
    let unchanged = ApplyMoveResult {
        black_mask,
        white_mask,
        applied: false,
    };
    let player = match decode_player(turn) {
        Some(player) => player,
        None => return unchanged,
    };
    let board = match Board::from_pieces(Bitboard::from(black_mask), Bitboard::from(white_mask)) {
        Some(board) => board,
        None => return unchanged,
    };

    let mut engine = BoardEngine::with_position(board, player);
    if !engine.apply_move(x, y) {
        return unchanged;
    }
    ApplyMoveResult {
        black_mask: engine.board().pieces(Player::Black).into(),
        white_mask: engine.board().pieces(Player::White).into(),
        applied: true,
    }
}

/// Create an engine at the standard opening. Free it with [`othello_engine_free`].
#[no_mangle]
pub extern "C" fn othello_engine_new() -> *mut BoardEngine {
    Box::into_raw(Box::new(BoardEngine::new()))
}

/// Release an engine created by [`othello_engine_new`]. Null is ignored.
///
/// # Safety
/// `engine` must be null or a pointer returned by [`othello_engine_new`] that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn othello_engine_free(engine: *mut BoardEngine) {
    if !engine.is_null() {
        drop(Box::from_raw(engine));
    }
}

/// Check and apply a move. Returns false for a null engine or an illegal move.
///
/// # Safety
/// `engine` must be null or a live pointer from [`othello_engine_new`].
#[no_mangle]
pub unsafe extern "C" fn othello_attempt_move(engine: *mut BoardEngine, x: i32, y: i32) -> bool {
    match engine.as_mut() {
        Some(engine) => engine.attempt_move(x, y),
        None => false,
    }
}

/// Returns whether a move is legal, without applying it.
///
/// # Safety
/// `engine` must be null or a live pointer from [`othello_engine_new`].
#[no_mangle]
pub unsafe extern "C" fn othello_is_legal_move(engine: *const BoardEngine, x: i32, y: i32) -> bool {
    match engine.as_ref() {
        Some(engine) => engine.is_legal_move(x, y),
        None => false,
    }
}

/// Read one cell. Off-board coordinates and a null engine read as empty.
///
/// # Safety
/// `engine` must be null or a live pointer from [`othello_engine_new`].
#[no_mangle]
pub unsafe extern "C" fn othello_get_cell(engine: *const BoardEngine, x: i32, y: i32) -> u8 {
    engine
        .as_ref()
        .map_or(CELL_EMPTY, |engine| encode_cell(engine.get_cell(x, y)))
}

/// The player to move, or `0` for a null engine.
///
/// # Safety
/// `engine` must be null or a live pointer from [`othello_engine_new`].
#[no_mangle]
pub unsafe extern "C" fn othello_current_turn(engine: *const BoardEngine) -> u8 {
    engine.as_ref().map_or(CELL_EMPTY, |engine| {
        match engine.current_turn() {
            Player::Black => CELL_BLACK,
            Player::White => CELL_WHITE,
        }
    })
}
