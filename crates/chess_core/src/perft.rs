use crate::{board::GameState, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(state: &mut GameState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        legal_moves_into(state, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            state.apply_move(mv);
            nodes += inner(state, depth - 1, rest);
            state.undo_move();
        }
        nodes
    }

    let flags = state.terminal_flags();
    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    let nodes = inner(state, depth, &mut layers[..]);
    state.restore_terminal_flags(flags);
    nodes
}
