//! Two-ply material search: pick the move whose best opponent reply leaves
//! the opponent worst off.

use chess_core::{legal_moves, score_material, GameState, Move, CHECKMATE, STALEMATE};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::search::SearchOutcome;

/// Greedy search over material only.
///
/// Candidates are visited in a shuffled order so equal choices vary from
/// game to game. An opponent with no reply is scored as a terminal sentinel
/// (mated: `-CHECKMATE`, stalemated: `STALEMATE`); a reply that mates the
/// mover scores `CHECKMATE` for the opponent. `score` is the negated best
/// opponent score, so it reads from the mover's side.
pub fn greedy_move<R: Rng + ?Sized>(
    state: &mut GameState,
    moves: &[Move],
    rng: &mut R,
) -> SearchOutcome {
    let flags = state.terminal_flags();
    let turn = state.side_to_move().sign();

    let mut candidates = moves.to_vec();
    candidates.shuffle(rng);

    let mut nodes = 1u64;
    let mut opponent_min_max = CHECKMATE;
    let mut best_move = None;

    for mv in candidates {
        state.apply_move(mv);
        nodes += 1;
        let replies = legal_moves(state);

        let opponent_max = if state.is_stalemate() {
            STALEMATE
        } else if state.is_checkmate() {
            -CHECKMATE
        } else {
            let mut best_reply = -CHECKMATE;
            for reply in replies {
                state.apply_move(reply);
                nodes += 1;
                legal_moves(state);
                let score = if state.is_checkmate() {
                    CHECKMATE
                } else if state.is_stalemate() {
                    STALEMATE
                } else {
                    -turn * 10 * score_material(state.board())
                };
                best_reply = best_reply.max(score);
                state.undo_move();
            }
            best_reply
        };

        if opponent_max < opponent_min_max {
            opponent_min_max = opponent_max;
            best_move = Some(mv);
        }
        state.undo_move();
    }

    state.restore_terminal_flags(flags);
    debug!(
        "greedy: {} nodes, score {}, move {:?}",
        nodes,
        -opponent_min_max,
        best_move.map(|m| m.to_string())
    );
    SearchOutcome {
        best_move,
        score: -opponent_min_max,
        nodes,
    }
}

#[cfg(test)]
#[path = "greedy_tests.rs"]
mod greedy_tests;
