//! Classical Chess Engine
//!
//! Fixed-depth tree search over the static evaluation in `chess_core`:
//! negamax with alpha-beta pruning, plus plain negamax, plain minimax and
//! a two-ply greedy search over material.

mod config;
mod greedy;
mod search;

pub use config::{ConfigError, SearchConfig, Strategy, DEFAULT_DEPTH, MAX_DEPTH};
pub use greedy::greedy_move;
pub use search::{minimax, negamax, negamax_alpha_beta, SearchOutcome};

use chess_core::{Engine, GameState, Move, SearchResult};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_engine::random_move;

/// Chess engine running one configured strategy, random included.
///
/// The engine owns the RNG used by the greedy shuffle and by the random
/// choice, so a seeded engine plays reproducibly.
#[derive(Debug, Clone)]
pub struct ClassicalEngine {
    strategy: Strategy,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, state: &mut GameState, moves: &[Move], depth: u8) -> SearchResult {
        let outcome = match self.strategy {
            Strategy::Random => {
                let best_move = random_move(moves, &mut self.rng);
                debug!(
                    "random: picked {:?} from {} moves",
                    best_move.map(|m| m.to_string()),
                    moves.len()
                );
                SearchOutcome {
                    best_move,
                    score: 0,
                    nodes: 1,
                }
            }
            Strategy::Greedy => greedy_move(state, moves, &mut self.rng),
            Strategy::Minimax => minimax(state, moves, depth),
            Strategy::Negamax => negamax(state, moves, depth),
            Strategy::NegamaxAlphaBeta => negamax_alpha_beta(state, moves, depth),
        };
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        match self.strategy {
            Strategy::Random => "Random",
            Strategy::Greedy => "Classical (greedy)",
            Strategy::Minimax => "Classical (minimax)",
            Strategy::Negamax => "Classical (negamax)",
            Strategy::NegamaxAlphaBeta => "Classical (negamax alpha-beta)",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Picks a move for the side to move with `strategy`.
///
/// When the strategy comes back empty (depth 0, or every move looks
/// equally lost) a uniformly random legal move is played instead, so this
/// only returns `None` when `moves` is empty. `moves` must be the legal
/// moves of `state`.
pub fn find_move(
    state: &mut GameState,
    moves: &[Move],
    strategy: Strategy,
    depth: u8,
) -> Option<Move> {
    let mut engine = strategy.engine();
    let result = engine.search(state, moves, depth);
    match result.best_move {
        Some(mv) => Some(mv),
        None => {
            debug!(
                "{} found no move at depth {}, falling back to random",
                strategy, depth
            );
            random_move(moves, &mut rand::thread_rng())
        }
    }
}
