use gambit::board::fen::STARTING_POSITION_FEN;
use gambit::board::{Color, Game, PieceKind};
use gambit::ChessError;
use pretty_assertions::assert_eq;

#[test]
fn round_trips_standard_positions() {
    for fen in [
        STARTING_POSITION_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
    ] {
        assert_eq!(Game::from_fen(fen).unwrap().to_fen(), fen);
    }
}

#[test]
fn clocks_are_optional() {
    let g = Game::from_fen("4k3/8/8/8/8/8/8/4K3 b - -").unwrap();
    assert_eq!(g.side_to_move, Color::Black);
    assert_eq!((g.halfmove_clock, g.fullmove_number), (0, 1));
}

#[test]
fn rights_decide_which_rooks_count_as_unmoved() {
    let g = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
    let at = |s: &str| g.board.get(s.parse().unwrap()).unwrap();
    assert!(!at("h1").has_moved && at("a1").has_moved);
    assert!(!at("a8").has_moved && at("h8").has_moved);
    assert_eq!(at("e1").kind, PieceKind::King);
    assert!(!at("e1").has_moved);
}

#[test]
fn malformed_fens_are_errors() {
    for bad in [
        "",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
        "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
    ] {
        assert!(matches!(Game::from_fen(bad), Err(ChessError::InvalidFen(_))), "{bad:?}");
    }
}
