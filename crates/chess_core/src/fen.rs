use crate::{
    board::{Board, CastlingRights, GameState},
    error::FenError,
    types::*,
};

impl GameState {
    /// Forsyth-Edwards Notation parser used by tests and position setup.
    ///
    /// Reads the board, side to move, castling and en passant fields; the
    /// move counters are optional and ignored. Each side needs exactly one
    /// king.
    pub fn from_fen(fen: &str) -> Result<GameState, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        // FEN lists rank 8 first, which is row 0 here.
        let mut board = Board::EMPTY;
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: usize = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or(FenError::PieceChar(ch))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col >= 8 {
                        return Err(FenError::RankWidth { rank: 8 - row });
                    }
                    board.set_piece(
                        Square::new(row as u8, col as u8),
                        Some(Piece::new(color, kind)),
                    );
                    col += 1;
                }
            }
            if col != 8 {
                return Err(FenError::RankWidth { rank: 8 - row });
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::CastlingChar(c)),
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            ep => Some(Square::from_coord(ep).ok_or_else(|| FenError::EnPassant(ep.to_string()))?),
        };

        let white_king = single_king(&board, Color::White)?;
        let black_king = single_king(&board, Color::Black)?;

        Ok(GameState::from_parts(
            board,
            side_to_move,
            castling,
            en_passant,
            white_king,
            black_king,
        ))
    }
}

fn single_king(board: &Board, c: Color) -> Result<Square, FenError> {
    let mut kings = board
        .pieces()
        .filter(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
        .map(|(sq, _)| sq);
    match (kings.next(), kings.next()) {
        (Some(sq), None) => Ok(sq),
        _ => Err(FenError::KingCount(c)),
    }
}
