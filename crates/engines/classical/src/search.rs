//! Fixed-depth tree searches over the full evaluation.
//!
//! Every node below the root generates its own legal moves right after the
//! move leading to it is applied, which also refreshes the checkmate and
//! stalemate flags the leaf evaluation reads. The root uses the moves the
//! caller supplies.
//!
//! A node with no moves above the horizon keeps its starting bound: the side
//! to move scores `-CHECKMATE` whether it is mated or stalemated. Only the
//! horizon evaluation tells the two apart.

use chess_core::{legal_moves, score_board, GameState, Move, Score, CHECKMATE};
use log::debug;

/// What a search found. `score` is from the side to move's point of view.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Best root move, `None` if no move beat the mated-score floor
    pub best_move: Option<Move>,
    pub score: Score,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// Negamax with alpha-beta pruning, searched `depth` plies from the root.
///
/// The initial window is `(-CHECKMATE, CHECKMATE)`. Pruning only skips
/// subtrees; the result matches [`negamax`] exactly.
pub fn negamax_alpha_beta(state: &mut GameState, moves: &[Move], depth: u8) -> SearchOutcome {
    let turn = state.side_to_move().sign();
    let outcome = run(state, depth, |search, state| {
        search.negamax_alpha_beta(state, moves, depth, -CHECKMATE, CHECKMATE, turn)
    });
    debug!(
        "negamax-alpha-beta depth {}: {} nodes, score {}, move {:?}",
        depth,
        outcome.nodes,
        outcome.score,
        outcome.best_move.map(|m| m.to_string())
    );
    outcome
}

/// Negamax without pruning. Visits every node down to `depth`.
pub fn negamax(state: &mut GameState, moves: &[Move], depth: u8) -> SearchOutcome {
    let turn = state.side_to_move().sign();
    let outcome = run(state, depth, |search, state| {
        search.negamax(state, moves, depth, turn)
    });
    debug!(
        "negamax depth {}: {} nodes, score {}, move {:?}",
        depth,
        outcome.nodes,
        outcome.score,
        outcome.best_move.map(|m| m.to_string())
    );
    outcome
}

/// Plain minimax: white maximises the white-positive evaluation, black
/// minimises it. The returned score is flipped to the side to move.
pub fn minimax(state: &mut GameState, moves: &[Move], depth: u8) -> SearchOutcome {
    let turn = state.side_to_move().sign();
    let white_to_move = turn > 0;
    let mut outcome = run(state, depth, |search, state| {
        search.minimax(state, moves, depth, white_to_move)
    });
    outcome.score *= turn;
    debug!(
        "minimax depth {}: {} nodes, score {}, move {:?}",
        depth,
        outcome.nodes,
        outcome.score,
        outcome.best_move.map(|m| m.to_string())
    );
    outcome
}

/// Shared root bookkeeping: counts nodes, and hands the caller's state back
/// with the terminal flags it came in with.
fn run<F>(state: &mut GameState, depth: u8, f: F) -> SearchOutcome
where
    F: FnOnce(&mut Search, &mut GameState) -> (Score, Option<Move>),
{
    let flags = state.terminal_flags();
    let mut search = Search {
        root_depth: depth,
        nodes: 0,
    };
    let (score, best_move) = f(&mut search, state);
    state.restore_terminal_flags(flags);
    SearchOutcome {
        best_move,
        score,
        nodes: search.nodes,
    }
}

struct Search {
    /// Depth the search started at; the root is the only node searched at it.
    root_depth: u8,
    nodes: u64,
}

impl Search {
    fn negamax_alpha_beta(
        &mut self,
        state: &mut GameState,
        moves: &[Move],
        depth: u8,
        mut alpha: Score,
        beta: Score,
        turn: i32,
    ) -> (Score, Option<Move>) {
        self.nodes += 1;
        if depth == 0 {
            return (turn * score_board(state), None);
        }

        // TODO: order captures first to raise the cutoff rate.
        let mut max_score = -CHECKMATE;
        let mut best = None;
        for &mv in moves {
            state.apply_move(mv);
            let next = legal_moves(state);
            let (score, _) = self.negamax_alpha_beta(state, &next, depth - 1, -beta, -alpha, -turn);
            let score = -score;
            state.undo_move();

            if score > max_score {
                max_score = score;
                if depth == self.root_depth {
                    best = Some(mv);
                }
            }
            if max_score > alpha {
                alpha = max_score;
            }
            if alpha >= beta {
                break;
            }
        }
        (max_score, best)
    }

    fn negamax(
        &mut self,
        state: &mut GameState,
        moves: &[Move],
        depth: u8,
        turn: i32,
    ) -> (Score, Option<Move>) {
        self.nodes += 1;
        if depth == 0 {
            return (turn * score_board(state), None);
        }

        let mut max_score = -CHECKMATE;
        let mut best = None;
        for &mv in moves {
            state.apply_move(mv);
            let next = legal_moves(state);
            let score = -self.negamax(state, &next, depth - 1, -turn).0;
            state.undo_move();

            if score > max_score {
                max_score = score;
                if depth == self.root_depth {
                    best = Some(mv);
                }
            }
        }
        (max_score, best)
    }

    fn minimax(
        &mut self,
        state: &mut GameState,
        moves: &[Move],
        depth: u8,
        white_to_move: bool,
    ) -> (Score, Option<Move>) {
        self.nodes += 1;
        if depth == 0 {
            return (score_board(state), None);
        }

        let mut best = None;
        let mut best_score = if white_to_move { -CHECKMATE } else { CHECKMATE };
        for &mv in moves {
            state.apply_move(mv);
            let next = legal_moves(state);
            let score = self.minimax(state, &next, depth - 1, !white_to_move).0;
            state.undo_move();

            let improves = if white_to_move {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                if depth == self.root_depth {
                    best = Some(mv);
                }
            }
        }
        (best_score, best)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
