use super::*;
use crate::board::Board;

#[test]
fn test_square_coordinates() {
    let e4 = Square::from_coord("e4").unwrap();
    assert_eq!((e4.row(), e4.col()), (4, 4));
    assert_eq!(e4.to_string(), "e4");

    assert_eq!(Square::new(0, 0).to_string(), "a8");
    assert_eq!(Square::new(7, 7).to_string(), "h1");
    assert_eq!(Square::from_coord("i1"), None);
    assert_eq!(Square::from_coord("a9"), None);
    assert_eq!(Square::from_coord("e"), None);
}

#[test]
#[should_panic]
fn test_square_off_board_panics() {
    Square::new(8, 0);
}

#[test]
fn test_square_offset_stays_on_board() {
    let a8 = Square::new(0, 0);
    assert_eq!(a8.offset(-1, 0), None);
    assert_eq!(a8.offset(0, -1), None);
    assert_eq!(a8.offset(1, 1), Some(Square::new(1, 1)));
    assert_eq!(Square::new(7, 7).offset(1, 0), None);
    assert_eq!(Square::all().count(), 64);
}

#[test]
fn test_move_equality_ignores_flags() {
    let board = Board::standard();
    let a = Move::new(Square::new(6, 4), Square::new(4, 4), &board);
    let mut b = a;
    b.is_castle = true;
    b.piece_captured = Some(Piece::new(Color::Black, PieceKind::Pawn));
    assert_eq!(a, b);

    let c = Move::new(Square::new(6, 4), Square::new(5, 4), &board);
    assert_ne!(a, c);
}

#[test]
fn test_move_reads_pieces_from_board() {
    let board = Board::standard();
    let mv = Move::new(Square::new(7, 6), Square::new(5, 5), &board);
    assert_eq!(mv.piece_moved, Piece::new(Color::White, PieceKind::Knight));
    assert_eq!(mv.piece_captured, None);
    assert!(!mv.is_promotion);
    assert_eq!(mv.coordinates(), "g1f3");
}

#[test]
#[should_panic]
fn test_move_from_empty_square_panics() {
    let board = Board::standard();
    Move::new(Square::new(4, 4), Square::new(3, 4), &board);
}

#[test]
fn test_color_helpers() {
    assert_eq!(Color::White.other(), Color::Black);
    assert_eq!(Color::White.sign(), 1);
    assert_eq!(Color::Black.sign(), -1);
    assert_eq!(Color::White.promotion_row(), 0);
    assert_eq!(Color::Black.pawn_start_row(), 1);
    assert_eq!(Piece::new(Color::Black, PieceKind::Knight).to_char(), 'n');
    assert_eq!(PieceKind::from_letter('q'), Some(PieceKind::Queen));
    assert_eq!(PieceKind::from_letter('x'), None);
}
