pub mod board;
pub mod error;
pub mod eval;
pub mod fen;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::FenError;
pub use eval::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every move-picking strategy
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if the strategy found none)
    pub best_move: Option<Move>,
    /// Score of the chosen line from the side to move's point of view,
    /// in tenths of a pawn
    pub score: Score,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all move-picking engines implement.
///
/// Engines borrow the game state for the duration of the call and must
/// hand it back exactly as they received it.
pub trait Engine: Send {
    /// Pick a move for the side to move.
    ///
    /// # Arguments
    /// * `state` - The live game; mutated during search and restored
    /// * `moves` - The legal moves of `state`, as produced by `legal_moves`
    /// * `depth` - Search depth in plies
    fn search(&mut self, state: &mut GameState, moves: &[Move], depth: u8) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
