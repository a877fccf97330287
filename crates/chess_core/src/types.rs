use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    /// +1 for white, -1 for black. Scores are white-positive, so this turns
    /// them into side-to-move scores.
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    /// Row holding this colour's pieces in the starting position.
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
    /// Row direction pawns of this colour advance in.
    pub fn pawn_dir(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter used in notation and board diagrams.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN-style character: upper case for white, lower case for black.
    pub fn to_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

/// A board square addressed by (row, col). Row 0 is rank 8, row 7 is rank 1;
/// col 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Panics if either coordinate is outside 0..8.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square ({row}, {col}) is off the board");
        Self { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }

    /// The square `dr` rows and `dc` columns away, if it is on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            Some(Square {
                row: r as u8,
                col: c as u8,
            })
        } else {
            None
        }
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }
    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Parses "e4"-style coordinates.
    pub fn from_coord(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square {
            row: b'8' - r,
            col: f - b'a',
        })
    }

    /// All 64 squares, row by row starting at a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// One ply. The moved and captured pieces are read from the board when the
/// move is built and never re-read.
///
/// Equality and hashing only look at the start and end squares: the flags
/// follow from the position the move was generated in.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// For en passant this is the pawn taken from beside the start square.
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
}

impl Move {
    /// Builds an ordinary move (or capture). Panics if `start` is empty.
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        let piece_moved = board
            .piece_at(start)
            .expect("no piece on the move's start square");
        let is_promotion = piece_moved.kind == PieceKind::Pawn
            && end.row() == piece_moved.color.promotion_row();
        Self {
            start,
            end,
            piece_moved,
            piece_captured: board.piece_at(end),
            is_en_passant: false,
            is_castle: false,
            is_promotion,
        }
    }

    /// Builds an en-passant capture; the victim sits on the start row, in
    /// the destination's file.
    pub fn en_passant(start: Square, end: Square, board: &Board) -> Self {
        let mut mv = Self::new(start, end, board);
        mv.piece_captured = board.piece_at(Square::new(start.row(), end.col()));
        mv.is_en_passant = true;
        mv
    }

    /// Builds a castling move: the king's two-column step toward the rook.
    pub fn castle(start: Square, end: Square, board: &Board) -> Self {
        let mut mv = Self::new(start, end, board);
        mv.is_castle = true;
        mv
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    pub fn is_king_side_castle(&self) -> bool {
        self.is_castle && self.end.col() > self.start.col()
    }

    /// Start and end squares, e.g. "e2e4".
    pub fn coordinates(&self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}
impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
