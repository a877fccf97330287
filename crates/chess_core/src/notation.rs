//! Human-readable move text.
//!
//! Rendering follows a simplified algebraic style: `e4`, `exd5`, `Nf3`,
//! `Bxc6`, `0-0`, `0-0-0`. Check, mate and disambiguation suffixes are not
//! produced.

use std::fmt;

use crate::{board::GameState, movegen::legal_moves, types::*};

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle {
            return f.write_str(if self.is_king_side_castle() { "0-0" } else { "0-0-0" });
        }
        match self.piece_moved.kind {
            PieceKind::Pawn if self.is_capture() => {
                write!(f, "{}x{}", self.start.file_char(), self.end)
            }
            PieceKind::Pawn => write!(f, "{}", self.end),
            kind => {
                let x = if self.is_capture() { "x" } else { "" };
                write!(f, "{}{}{}", kind.letter(), x, self.end)
            }
        }
    }
}

/// Matches coordinate text such as "e2e4" against the legal moves of
/// `state`, so the returned move carries the right flags. A trailing
/// promotion letter is accepted; every promotion is to a queen.
pub fn parse_move(state: &mut GameState, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if txt.len() < 4 || txt.len() > 5 || !txt.is_ascii() {
        return None;
    }
    let start = Square::from_coord(&txt[0..2])?;
    let end = Square::from_coord(&txt[2..4])?;
    if let Some(p) = txt[4..].chars().next() {
        PieceKind::from_letter(p)?;
    }

    legal_moves(state)
        .into_iter()
        .find(|m| m.start == start && m.end == end)
}

/// Numbered move pairs: `1. e4 e5 2. Nf3`.
pub fn format_move_log(moves: &[Move]) -> String {
    moves
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let mut s = format!("{}. {}", i + 1, pair[0]);
            if let Some(reply) = pair.get(1) {
                s.push(' ');
                s.push_str(&reply.to_string());
            }
            s
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
