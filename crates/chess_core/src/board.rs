use std::fmt;

use log::trace;

use crate::types::*;

/// 8x8 grid of squares, indexed `[row][col]` with row 0 = rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Board {
    pub const EMPTY: Board = Board([[None; 8]; 8]);

    /// The standard starting arrangement.
    pub fn standard() -> Self {
        let mut b = Board::EMPTY;
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as u8;
            b.set_piece(Square::new(0, col), Some(Piece::new(Color::Black, kind)));
            b.set_piece(Square::new(1, col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            b.set_piece(Square::new(6, col), Some(Piece::new(Color::White, PieceKind::Pawn)));
            b.set_piece(Square::new(7, col), Some(Piece::new(Color::White, kind)));
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.0[sq.row() as usize][sq.col() as usize]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.0[sq.row() as usize][sq.col() as usize] = pc;
    }
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn find_king(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub bk: bool,
    pub wq: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            wk: true,
            bk: true,
            wq: true,
            bq: true,
        }
    }
    pub const fn none() -> Self {
        Self {
            wk: false,
            bk: false,
            wq: false,
            bq: false,
        }
    }

    pub fn king_side(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }
    pub fn queen_side(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    pub fn clear_king_side(&mut self, c: Color) {
        match c {
            Color::White => self.wk = false,
            Color::Black => self.bk = false,
        }
    }
    pub fn clear_queen_side(&mut self, c: Color) {
        match c {
            Color::White => self.wq = false,
            Color::Black => self.bq = false,
        }
    }

    /// Drops the right tied to a rook corner, if `sq` is one.
    fn clear_corner(&mut self, sq: Square) {
        for c in [Color::White, Color::Black] {
            if sq.row() != c.back_row() {
                continue;
            }
            match sq.col() {
                0 => self.clear_queen_side(c),
                7 => self.clear_king_side(c),
                _ => {}
            }
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

/// The live game: position, side to move, and the stacks needed to take
/// moves back.
///
/// `move_log`, `en_passant_history` and `castling_history` always have the
/// same length; `apply_move` pushes one entry onto each and `undo_move`
/// pops one from each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    /// Square a pawn may move to this ply to capture en passant.
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling: CastlingRights,
    pub(crate) move_log: Vec<Move>,
    pub(crate) en_passant_history: Vec<Option<Square>>,
    pub(crate) castling_history: Vec<CastlingRights>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

/// How the game stands according to the last legal-move generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => f.write_str("Game in progress"),
            Outcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Outcome::Stalemate => f.write_str("Stalemate"),
        }
    }
}

impl GameState {
    /// Standard starting position, white to move, full castling rights.
    pub fn new_game() -> Self {
        Self::from_parts(
            Board::standard(),
            Color::White,
            CastlingRights::all(),
            None,
            Square::new(7, 4),
            Square::new(0, 4),
        )
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        white_king: Square,
        black_king: Square,
    ) -> Self {
        GameState {
            board,
            side_to_move,
            white_king,
            black_king,
            en_passant,
            castling,
            move_log: Vec::new(),
            en_passant_history: Vec::new(),
            castling_history: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    pub fn king_square(&self, c: Color) -> Square {
        match c {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    pub fn outcome(&self) -> Outcome {
        if self.checkmate {
            Outcome::Checkmate {
                winner: self.side_to_move.other(),
            }
        } else if self.stalemate {
            Outcome::Stalemate
        } else {
            Outcome::Ongoing
        }
    }

    /// (checkmate, stalemate) as set by the last legal-move generation.
    /// Searches save these on entry and put them back before returning.
    pub fn terminal_flags(&self) -> (bool, bool) {
        (self.checkmate, self.stalemate)
    }
    pub fn restore_terminal_flags(&mut self, (checkmate, stalemate): (bool, bool)) {
        self.checkmate = checkmate;
        self.stalemate = stalemate;
    }

    pub fn in_check(&self, c: Color) -> bool {
        self.is_square_attacked(self.king_square(c), c.other())
    }

    /// Whether any piece of colour `by` attacks `target`, looking outward
    /// from the target square. Meant for occupied squares such as a king's;
    /// empty castling squares are checked in `castle_moves`.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let holds = |sq: Option<Square>, kinds: &[PieceKind]| -> bool {
            match sq.and_then(|s| self.piece_at(s)) {
                Some(pc) => pc.color == by && kinds.contains(&pc.kind),
                None => false,
            }
        };

        // Pawns of `by` sit one step behind the target in their direction
        // of travel.
        let back = -by.pawn_dir();
        for dc in [-1, 1] {
            if holds(target.offset(back, dc), &[PieceKind::Pawn]) {
                return true;
            }
        }

        for (dr, dc) in KNIGHT_DELTAS {
            if holds(target.offset(dr, dc), &[PieceKind::Knight]) {
                return true;
            }
        }

        for (dr, dc) in KING_DELTAS {
            if holds(target.offset(dr, dc), &[PieceKind::King]) {
                return true;
            }
        }

        let rays: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
            (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
            (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
        ];
        for (dirs, kinds) in rays {
            for &(dr, dc) in dirs {
                let mut cur = target.offset(dr, dc);
                while let Some(sq) = cur {
                    if let Some(pc) = self.piece_at(sq) {
                        if pc.color == by && kinds.contains(&pc.kind) {
                            return true;
                        }
                        break;
                    }
                    cur = sq.offset(dr, dc);
                }
            }
        }

        false
    }

    /// Plays `mv` on the board. The move must come from this position's
    /// legal (or pseudo-legal) move list.
    pub fn apply_move(&mut self, mv: Move) {
        trace!("apply {mv}");
        let mover = mv.piece_moved.color;

        self.en_passant_history.push(self.en_passant);
        self.castling_history.push(self.castling);

        self.board.set_piece(mv.start, None);
        self.board.set_piece(mv.end, Some(mv.piece_moved));

        if mv.is_promotion {
            self.board
                .set_piece(mv.end, Some(Piece::new(mover, PieceKind::Queen)));
        }

        if mv.is_en_passant {
            self.board
                .set_piece(Square::new(mv.start.row(), mv.end.col()), None);
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.board.piece_at(rook_from);
            self.board.set_piece(rook_from, None);
            self.board.set_piece(rook_to, rook);
        }

        if mv.piece_moved.kind == PieceKind::King {
            match mover {
                Color::White => self.white_king = mv.end,
                Color::Black => self.black_king = mv.end,
            }
        }

        self.en_passant = if mv.piece_moved.kind == PieceKind::Pawn
            && mv.start.row().abs_diff(mv.end.row()) == 2
        {
            Some(Square::new(
                (mv.start.row() + mv.end.row()) / 2,
                mv.start.col(),
            ))
        } else {
            None
        };

        match mv.piece_moved.kind {
            PieceKind::King => {
                self.castling.clear_king_side(mover);
                self.castling.clear_queen_side(mover);
            }
            PieceKind::Rook if mv.start.row() == mover.back_row() => {
                self.castling.clear_corner(mv.start)
            }
            _ => {}
        }
        if mv.piece_captured.is_some() {
            self.castling.clear_corner(mv.end);
        }

        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.other();
    }

    /// Takes back the last applied move. Does nothing if no move has been
    /// played.
    pub fn undo_move(&mut self) {
        let (Some(mv), Some(en_passant), Some(castling)) = (
            self.move_log.pop(),
            self.en_passant_history.pop(),
            self.castling_history.pop(),
        ) else {
            return;
        };
        trace!("undo {mv}");

        self.board.set_piece(mv.start, Some(mv.piece_moved));
        if mv.is_en_passant {
            self.board.set_piece(mv.end, None);
            self.board
                .set_piece(Square::new(mv.start.row(), mv.end.col()), mv.piece_captured);
        } else {
            self.board.set_piece(mv.end, mv.piece_captured);
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.board.piece_at(rook_to);
            self.board.set_piece(rook_to, None);
            self.board.set_piece(rook_from, rook);
        }

        if mv.piece_moved.kind == PieceKind::King {
            match mv.piece_moved.color {
                Color::White => self.white_king = mv.start,
                Color::Black => self.black_king = mv.start,
            }
        }

        self.en_passant = en_passant;
        self.castling = castling;
        self.side_to_move = self.side_to_move.other();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", (b'8' - row) as char)?;
            for col in 0..8u8 {
                let c = self
                    .piece_at(Square::new(row, col))
                    .map_or('.', Piece::to_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Rook (from, to) for a castling move: kingside h-file to f-file,
/// queenside a-file to d-file.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.start.row();
    if mv.is_king_side_castle() {
        (Square::new(row, 7), Square::new(row, 5))
    } else {
        (Square::new(row, 0), Square::new(row, 3))
    }
}

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
