use crate::{
    board::{DIAGONALS, GameState, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS},
    types::*,
};

/// Generate all legal moves, returning a freshly allocated vector.
///
/// Also refreshes the state's checkmate/stalemate flags: with no legal
/// moves the side to move is mated if in check, stalemated otherwise.
pub fn legal_moves(state: &mut GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(state, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(state: &mut GameState, out: &mut Vec<Move>) {
    out.clear();
    let saved_en_passant = state.en_passant;
    let saved_castling = state.castling;

    pseudo_legal_moves_into(state, state.side_to_move, out);
    castle_moves(state, out);

    let mover = state.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable state.
    out.retain(|&mv| {
        state.apply_move(mv);
        let illegal = state.in_check(mover);
        state.undo_move();
        !illegal
    });

    state.en_passant = saved_en_passant;
    state.castling = saved_castling;

    if out.is_empty() {
        let in_check = state.in_check(mover);
        state.checkmate = in_check;
        state.stalemate = !in_check;
    } else {
        state.checkmate = false;
        state.stalemate = false;
    }
}

/// Moves obeying piece movement rules for the side to move, without the
/// own-king safety test. Castling is not included.
pub fn pseudo_legal_moves(state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_legal_moves_into(state, state.side_to_move, &mut out);
    out
}

/// Pseudo-legal moves for `side`, whether or not it is the side to move.
fn pseudo_legal_moves_into(state: &GameState, side: Color, out: &mut Vec<Move>) {
    for (sq, pc) in state.board.pieces() {
        if pc.color != side {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(state, sq, pc.color, out),
            PieceKind::Knight => gen_steps(state, sq, pc.color, out, &KNIGHT_DELTAS),
            PieceKind::Bishop => gen_slider(state, sq, pc.color, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(state, sq, pc.color, out, &ORTHOGONALS),
            PieceKind::Queen => {
                gen_slider(state, sq, pc.color, out, &DIAGONALS);
                gen_slider(state, sq, pc.color, out, &ORTHOGONALS);
            }
            PieceKind::King => gen_steps(state, sq, pc.color, out, &KING_DELTAS),
        }
    }
}

fn gen_pawn(state: &GameState, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.pawn_dir();
    let board = &state.board;

    // forward 1
    if let Some(to) = from.offset(dir, 0) {
        if board.is_empty(to) {
            out.push(Move::new(from, to, board));

            // forward 2 from start
            if from.row() == c.pawn_start_row() {
                if let Some(to2) = from.offset(2 * dir, 0) {
                    if board.is_empty(to2) {
                        out.push(Move::new(from, to2, board));
                    }
                }
            }
        }
    }

    // captures + en-passant
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            match board.piece_at(to) {
                Some(tpc) if tpc.color != c => out.push(Move::new(from, to, board)),
                Some(_) => {}
                None if state.en_passant == Some(to) => {
                    out.push(Move::en_passant(from, to, board))
                }
                None => {}
            }
        }
    }
}

/// Knight and king: single steps from a fixed offset table.
fn gen_steps(state: &GameState, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match state.board.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to, &state.board)),
            }
        }
    }
}

fn gen_slider(state: &GameState, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match state.board.piece_at(to) {
                None => out.push(Move::new(from, to, &state.board)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to, &state.board));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

/// Appends the castling moves available to the side to move. The king may
/// not be in check, and may not pass through or land on an attacked square.
///
/// A transit square counts as attacked when some pseudo-legal enemy move
/// ends on it, as if the enemy were to move. On these empty squares that
/// includes pawn pushes and leaves out pawn diagonals.
fn castle_moves(state: &GameState, out: &mut Vec<Move>) {
    let c = state.side_to_move;
    let row = c.back_row();
    let king_from = Square::new(row, 4);
    if state.king_square(c) != king_from {
        return;
    }
    let rights = state.castling;
    if !rights.king_side(c) && !rights.queen_side(c) {
        return;
    }

    let enemy = c.other();
    if state.is_square_attacked(king_from, enemy) {
        return;
    }

    let mut enemy_moves = Vec::with_capacity(64);
    pseudo_legal_moves_into(state, enemy, &mut enemy_moves);

    let empty = |col: u8| state.board.is_empty(Square::new(row, col));
    let safe = |col: u8| {
        let target = Square::new(row, col);
        !enemy_moves.iter().any(|m| m.end == target)
    };
    let own_rook = |col: u8| {
        state.board.piece_at(Square::new(row, col)) == Some(Piece::new(c, PieceKind::Rook))
    };

    // King side: e->g, f and g empty and not attacked
    if rights.king_side(c) && own_rook(7) && empty(5) && empty(6) && safe(5) && safe(6) {
        out.push(Move::castle(king_from, Square::new(row, 6), &state.board));
    }
    // Queen side: e->c, d, c and b empty; only d and c need to be safe
    if rights.queen_side(c)
        && own_rook(0)
        && empty(3)
        && empty(2)
        && empty(1)
        && safe(3)
        && safe(2)
    {
        out.push(Move::castle(king_from, Square::new(row, 2), &state.board));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
