use super::*;

fn find(state: &mut GameState, txt: &str) -> Move {
    parse_move(state, txt).unwrap_or_else(|| panic!("{txt} is not legal here"))
}

#[test]
fn test_pawn_and_piece_moves() {
    let mut state = GameState::new_game();
    let e4 = find(&mut state, "e2e4");
    assert_eq!(e4.to_string(), "e4");
    let nf3 = find(&mut state, "g1f3");
    assert_eq!(nf3.to_string(), "Nf3");
}

#[test]
fn test_captures() {
    let mut state = GameState::new_game();
    for txt in ["e2e4", "d7d5"] {
        let mv = find(&mut state, txt);
        state.apply_move(mv);
    }
    assert_eq!(find(&mut state, "e4d5").to_string(), "exd5");

    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert_eq!(find(&mut state, "a1a8").to_string(), "Rxa8");
    assert_eq!(find(&mut state, "a1a5").to_string(), "Ra5");
}

#[test]
fn test_en_passant_renders_as_pawn_capture() {
    let mut state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    assert_eq!(find(&mut state, "e5d6").to_string(), "exd6");
}

#[test]
fn test_castles() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert_eq!(find(&mut state, "e1g1").to_string(), "0-0");
    assert_eq!(find(&mut state, "e1c1").to_string(), "0-0-0");
}

#[test]
fn test_parse_rejects_bad_text() {
    let mut state = GameState::new_game();
    assert!(parse_move(&mut state, "e2e5").is_none());
    assert!(parse_move(&mut state, "zz").is_none());
    assert!(parse_move(&mut state, "e2e4x").is_none());
    assert!(parse_move(&mut state, " e2e4 ").is_some());
}

#[test]
fn test_parse_promotion_suffix() {
    let mut state = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mv = find(&mut state, "a7a8q");
    assert!(mv.is_promotion);
    assert_eq!(mv.to_string(), "a8");
}

#[test]
fn test_move_log_pairs() {
    let mut state = GameState::new_game();
    for txt in ["e2e4", "e7e5", "g1f3"] {
        let mv = find(&mut state, txt);
        state.apply_move(mv);
    }
    assert_eq!(format_move_log(state.move_log()), "1. e4 e5 2. Nf3");
    assert_eq!(format_move_log(&[]), "");
}
