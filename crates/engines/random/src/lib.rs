//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from the legal moves it is handed.
//! Useful for:
//! - Falling back when a search comes back without a move
//! - Baseline comparisons (any real search should easily beat this)
//! - Stress testing move generation

use chess_core::Move;
use rand::seq::SliceRandom;
use rand::Rng;


/// Picks one of `moves` uniformly at random. `None` only for an empty slice.
pub fn random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}
