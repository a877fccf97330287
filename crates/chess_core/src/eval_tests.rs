use super::*;
use crate::movegen::legal_moves;

#[test]
fn test_start_position_is_balanced() {
    let state = GameState::new_game();
    assert_eq!(score_material(state.board()), 0);
    assert_eq!(score_board(&state), 0);
}

#[test]
fn test_missing_queen() {
    let state =
        GameState::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(score_material(state.board()), 9);
    // 9 pawns of material plus the d1 queen's unanswered square bonus
    assert_eq!(score_board(&state), 93);
}

#[test]
fn test_material_values() {
    assert_eq!(piece_value(PieceKind::King), 0);
    assert_eq!(piece_value(PieceKind::Queen), 9);
    assert_eq!(piece_value(PieceKind::Rook), 5);
    assert_eq!(piece_value(PieceKind::Bishop), 3);
    assert_eq!(piece_value(PieceKind::Knight), 3);
    assert_eq!(piece_value(PieceKind::Pawn), 1);
}

#[test]
fn test_checkmate_scores_for_the_winner() {
    let mut state = GameState::from_fen("k7/1Q6/1K6/8/8/8/8/8 b - - 0 1").unwrap();
    legal_moves(&mut state);
    assert_eq!(score_board(&state), CHECKMATE);

    let mut state = GameState::from_fen("7k/8/8/8/8/8/5PPP/r5K1 w - - 0 1").unwrap();
    legal_moves(&mut state);
    assert!(state.is_checkmate());
    assert_eq!(score_board(&state), -CHECKMATE);
}

#[test]
fn test_stalemate_scores_zero() {
    let mut state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    legal_moves(&mut state);
    assert_eq!(score_board(&state), STALEMATE);
}

#[test]
fn test_pawn_tables_mirror_each_other() {
    let white = Piece::new(Color::White, PieceKind::Pawn);
    let black = Piece::new(Color::Black, PieceKind::Pawn);
    for sq in Square::all() {
        let mirrored = Square::new(7 - sq.row(), sq.col());
        assert_eq!(position_bonus(white, sq), position_bonus(black, mirrored));
    }
}

#[test]
fn test_central_knight_beats_corner_knight() {
    let n = Piece::new(Color::White, PieceKind::Knight);
    let center = Square::from_coord("d4").unwrap();
    let corner = Square::from_coord("a1").unwrap();
    assert!(position_bonus(n, center) > position_bonus(n, corner));
}
