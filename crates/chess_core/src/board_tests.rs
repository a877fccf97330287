use super::*;
use crate::movegen::legal_moves;

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

fn find(state: &mut GameState, from: &str, to: &str) -> Move {
    legal_moves(state)
        .into_iter()
        .find(|m| m.start == sq(from) && m.end == sq(to))
        .unwrap_or_else(|| panic!("{from}{to} is not legal here"))
}

#[test]
fn test_new_game() {
    let state = GameState::new_game();
    assert_eq!(state.side_to_move(), Color::White);
    assert_eq!(state.king_square(Color::White), sq("e1"));
    assert_eq!(state.king_square(Color::Black), sq("e8"));
    assert_eq!(state.castling(), CastlingRights::all());
    assert_eq!(state.en_passant(), None);
    assert!(state.move_log().is_empty());
    assert_eq!(state.outcome(), Outcome::Ongoing);
}

#[test]
fn test_double_push_sets_en_passant_and_undo_restores() {
    let mut state = GameState::new_game();
    let before = state.clone();
    let mv = find(&mut state, "e2", "e4");

    state.apply_move(mv);
    assert_eq!(state.en_passant(), Some(sq("e3")));
    assert_eq!(state.side_to_move(), Color::Black);
    assert_eq!(state.piece_at(sq("e2")), None);
    assert_eq!(state.move_log(), &[mv]);

    state.undo_move();
    assert_eq!(state, before);
}

#[test]
fn test_single_push_clears_en_passant() {
    let mut state = GameState::new_game();
    let mv = find(&mut state, "e2", "e4");
    state.apply_move(mv);
    let reply = find(&mut state, "g8", "f6");
    state.apply_move(reply);
    assert_eq!(state.en_passant(), None);
}

#[test]
fn test_undo_with_empty_log_is_noop() {
    let mut state = GameState::new_game();
    state.undo_move();
    assert_eq!(state, GameState::new_game());
}

#[test]
fn test_promotion_to_queen_and_back() {
    let mut state = GameState::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
    let before = state.clone();
    let mv = find(&mut state, "a7", "a8");
    assert!(mv.is_promotion);

    state.apply_move(mv);
    assert_eq!(
        state.piece_at(sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );

    state.undo_move();
    assert_eq!(
        state.piece_at(sq("a7")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(state.piece_at(sq("a8")), None);
    assert_eq!(state.board(), before.board());
}

#[test]
fn test_en_passant_capture_and_undo() {
    let mut state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let before = state.clone();
    let mv = find(&mut state, "e5", "d6");
    assert!(mv.is_en_passant);

    state.apply_move(mv);
    assert_eq!(state.piece_at(sq("d5")), None);
    assert_eq!(
        state.piece_at(sq("d6")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );

    state.undo_move();
    assert_eq!(state.board(), before.board());
    assert_eq!(state.en_passant(), Some(sq("d6")));
}

#[test]
fn test_castle_moves_rook_and_clears_rights() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let before = state.clone();
    let mv = find(&mut state, "e1", "g1");
    assert!(mv.is_castle);

    state.apply_move(mv);
    assert_eq!(
        state.piece_at(sq("f1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(state.piece_at(sq("h1")), None);
    assert_eq!(state.king_square(Color::White), sq("g1"));
    assert!(!state.castling().wk && !state.castling().wq);
    assert!(state.castling().bk && state.castling().bq);

    state.undo_move();
    assert_eq!(state.board(), before.board());
    assert_eq!(state.castling(), CastlingRights::all());
    assert_eq!(state.king_square(Color::White), sq("e1"));
}

#[test]
fn test_queen_side_castle_rook_lands_on_d_file() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    let mv = find(&mut state, "e8", "c8");
    state.apply_move(mv);
    assert_eq!(
        state.piece_at(sq("d8")),
        Some(Piece::new(Color::Black, PieceKind::Rook))
    );
    assert_eq!(state.piece_at(sq("a8")), None);
    assert_eq!(state.king_square(Color::Black), sq("c8"));
}

#[test]
fn test_rook_move_clears_its_corner_only() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = find(&mut state, "a1", "a2");
    state.apply_move(mv);
    assert!(!state.castling().wq);
    assert!(state.castling().wk);
}

#[test]
fn test_capture_on_corner_clears_victims_right() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = find(&mut state, "a1", "a8");
    assert_eq!(
        mv.piece_captured,
        Some(Piece::new(Color::Black, PieceKind::Rook))
    );
    state.apply_move(mv);
    assert!(!state.castling().bq);
    assert!(state.castling().bk);
    assert!(!state.castling().wq);
    assert!(state.castling().wk);
}

#[test]
fn test_square_attacks_from_start() {
    let state = GameState::new_game();
    // d2/f2 pawns cover e3, nothing reaches e4
    assert!(state.is_square_attacked(sq("e3"), Color::White));
    assert!(!state.is_square_attacked(sq("e4"), Color::White));
    // g1 knight covers f3 and h3
    assert!(state.is_square_attacked(sq("h3"), Color::White));
    assert!(state.is_square_attacked(sq("f6"), Color::Black));
    assert!(!state.in_check(Color::White));
}

#[test]
fn test_slider_attacks_stop_at_blockers() {
    let state = GameState::from_fen("4k3/8/8/8/8/8/4P3/4R1K1 w - - 0 1").unwrap();
    assert!(state.is_square_attacked(sq("e2"), Color::White));
    assert!(!state.is_square_attacked(sq("e3"), Color::White));
    assert!(state.is_square_attacked(sq("a1"), Color::White));
}

#[test]
fn test_display_diagram() {
    let state = GameState::new_game();
    let text = state.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "8  r n b q k b n r");
    assert_eq!(lines[7], "1  R N B Q K B N R");
    assert_eq!(lines[8], "   a b c d e f g h");
}

#[test]
fn test_outcome_text() {
    assert_eq!(
        Outcome::Checkmate {
            winner: Color::Black
        }
        .to_string(),
        "Black wins by checkmate"
    );
    assert_eq!(Outcome::Stalemate.to_string(), "Stalemate");
}
