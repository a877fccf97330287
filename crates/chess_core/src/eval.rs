//! Static evaluation. Positive scores favour white, negative favour black.

use crate::{
    board::{Board, GameState},
    types::*,
};

/// Evaluation unit: one tenth of a pawn.
pub type Score = i32;

/// Score of a mated position (1000 pawns).
pub const CHECKMATE: Score = 10_000;
pub const STALEMATE: Score = 0;

/// Base material value in pawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Material balance in pawns, white minus black.
pub fn score_material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, pc)| pc.color.sign() * piece_value(pc.kind))
        .sum()
}

/// Full evaluation in tenths of a pawn: material plus a small bonus per
/// piece from its square table. Terminal flags take precedence: a mated
/// side to move scores `CHECKMATE` against it, stalemate scores zero.
pub fn score_board(state: &GameState) -> Score {
    if state.is_checkmate() {
        return -state.side_to_move().sign() * CHECKMATE;
    }
    if state.is_stalemate() {
        return STALEMATE;
    }

    state
        .board()
        .pieces()
        .map(|(sq, pc)| pc.color.sign() * (10 * piece_value(pc.kind) + position_bonus(pc, sq)))
        .sum()
}

/// Desirability of `sq` for `pc`, in tenths of a pawn.
pub fn position_bonus(pc: Piece, sq: Square) -> i32 {
    let table = match (pc.kind, pc.color) {
        (PieceKind::Pawn, Color::White) => &WHITE_PAWN_SCORES,
        (PieceKind::Pawn, Color::Black) => &BLACK_PAWN_SCORES,
        (PieceKind::Knight, _) => &KNIGHT_SCORES,
        (PieceKind::Bishop, _) => &BISHOP_SCORES,
        (PieceKind::Rook, _) => &ROOK_SCORES,
        (PieceKind::Queen, _) => &QUEEN_SCORES,
        (PieceKind::King, _) => &KING_SCORES,
    };
    table[sq.row() as usize][sq.col() as usize]
}

// Tables are indexed [row][col], row 0 = rank 8. Only pawns get a table per
// colour; the black one is the white one flipped top to bottom.

const KNIGHT_SCORES: [[i32; 8]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

const BISHOP_SCORES: [[i32; 8]; 8] = [
    [4, 3, 2, 1, 1, 2, 3, 4],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [2, 3, 4, 2, 2, 4, 3, 2],
    [1, 3, 3, 4, 4, 3, 3, 1],
    [1, 3, 3, 4, 4, 3, 3, 1],
    [2, 3, 4, 2, 2, 4, 3, 2],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

const QUEEN_SCORES: [[i32; 8]; 8] = [
    [1, 1, 1, 3, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 4, 3, 3, 3, 3, 4, 1],
    [1, 3, 2, 3, 3, 2, 3, 1],
    [1, 3, 2, 3, 3, 2, 3, 1],
    [1, 4, 3, 3, 3, 3, 4, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 3, 1, 1, 1, 1],
];

const ROOK_SCORES: [[i32; 8]; 8] = [
    [4, 2, 3, 4, 3, 4, 2, 4],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [4, 3, 4, 4, 4, 4, 3, 4],
];

const WHITE_PAWN_SCORES: [[i32; 8]; 8] = [
    [9, 9, 9, 9, 9, 9, 9, 9],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [5, 6, 7, 7, 7, 7, 6, 5],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const BLACK_PAWN_SCORES: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [5, 6, 7, 7, 7, 7, 6, 5],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [9, 9, 9, 9, 9, 9, 9, 9],
];

const KING_SCORES: [[i32; 8]; 8] = [
    [2, 2, 5, 1, 1, 2, 5, 2],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [2, 2, 5, 1, 1, 2, 5, 2],
];

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
