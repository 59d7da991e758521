use gambit::board::{Board, CastlingRights, Color, Game, Piece, PieceKind, Square};
use gambit::rules::legality::legal_moves_for;
use gambit::search::evaluate_board;
use gambit::{apply_move, filter_legal_moves, get_possible_moves, is_checkmate, is_king_in_check, is_stalemate};
use pretty_assertions::assert_eq;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn piece(kind: PieceKind, color: Color) -> Piece {
    Piece::new(kind, color)
}

const POSITIONS: [&str; 5] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
];

#[test]
fn start_pawn_has_single_and_double_push() {
    let b = Board::startpos();
    let mut targets: Vec<Square> = get_possible_moves(&b, sq(6, 4), None, &CastlingRights::all())
        .iter()
        .map(|m| m.to)
        .collect();
    targets.sort_by_key(|s| (s.row(), s.col()));
    assert_eq!(targets, vec![sq(4, 4), sq(5, 4)]);
}

#[test]
fn rook_on_open_file_gives_check() {
    let b = Board::empty()
        .with(sq(7, 4), piece(PieceKind::King, Color::White))
        .with(sq(0, 4), piece(PieceKind::Rook, Color::Black))
        .with(sq(0, 0), piece(PieceKind::King, Color::Black));
    assert!(is_king_in_check(&b, Color::White));
    assert!(!is_king_in_check(&b, Color::Black));
}

#[test]
fn protected_queen_next_to_cornered_king_mates() {
    let b = Board::empty()
        .with(sq(7, 7), piece(PieceKind::King, Color::White))
        .with(sq(6, 6), piece(PieceKind::Queen, Color::Black))
        .with(sq(7, 5), piece(PieceKind::King, Color::Black));
    assert!(is_checkmate(&b, Color::White));
    assert!(!is_stalemate(&b, Color::White));
    assert!(!is_checkmate(&b, Color::Black));
}

#[test]
fn bare_kings_are_neither_mate_nor_stalemate() {
    let b = Board::empty()
        .with(sq(7, 4), piece(PieceKind::King, Color::White))
        .with(sq(0, 4), piece(PieceKind::King, Color::Black));
    for c in [Color::White, Color::Black] {
        assert!(!is_checkmate(&b, c));
        assert!(!is_stalemate(&b, c));
    }
    assert!(evaluate_board(&b).abs() < 50, "{}", evaluate_board(&b));
}

#[test]
fn missing_king_is_never_in_check() {
    let b = Board::empty().with(sq(0, 4), piece(PieceKind::Rook, Color::Black));
    assert!(!is_king_in_check(&b, Color::White));
}

#[test]
fn mate_and_stalemate_imply_their_definitions() {
    let fens = [
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1",
        "7k/8/8/8/8/8/5PPP/r5K1 w - - 0 1",
    ];
    for fen in fens.iter().chain(POSITIONS.iter()) {
        let g = Game::from_fen(fen).unwrap();
        for c in [Color::White, Color::Black] {
            let legal = legal_moves_for(&g.board, c, None, &CastlingRights::from_unmoved(&g.board));
            if is_checkmate(&g.board, c) {
                assert!(is_king_in_check(&g.board, c) && legal.is_empty(), "{fen}");
            }
            if is_stalemate(&g.board, c) {
                assert!(!is_king_in_check(&g.board, c) && legal.is_empty(), "{fen}");
            }
        }
    }
}

#[test]
fn generation_is_idempotent() {
    for fen in POSITIONS {
        let g = Game::from_fen(fen).unwrap();
        for s in Square::all() {
            let a = get_possible_moves(&g.board, s, g.en_passant, &g.castling);
            let b = get_possible_moves(&g.board, s, g.en_passant, &g.castling);
            assert_eq!(a, b, "{fen} {s}");
        }
    }
}

#[test]
fn captures_remove_exactly_one_enemy_piece() {
    for fen in POSITIONS {
        let g = Game::from_fen(fen).unwrap();
        let enemy = !g.side_to_move;
        let before = g.board.piece_count(enemy);
        for mv in g.legal_moves() {
            let mut b = g.board;
            apply_move(&mut b, &mv);
            let expected = before - usize::from(mv.is_capture());
            assert_eq!(b.piece_count(enemy), expected, "{fen} {mv}");
        }
    }
}

#[test]
fn legal_moves_never_leave_the_king_in_check() {
    for fen in POSITIONS {
        let g = Game::from_fen(fen).unwrap();
        let mover = g.side_to_move;
        let pseudo: Vec<_> = Square::all()
            .flat_map(|s| get_possible_moves(&g.board, s, g.en_passant, &g.castling))
            .filter(|m| m.piece.color == mover)
            .collect();
        let legal = filter_legal_moves(&g.board, &pseudo, mover);
        assert!(legal.len() <= pseudo.len());
        for mv in legal {
            let mut b = g.board;
            apply_move(&mut b, &mv);
            assert!(!is_king_in_check(&b, mover), "{fen} {mv}");
        }
    }
}
