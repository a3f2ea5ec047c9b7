use super::*;
use crate::board::Board;
use crate::types::Move;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sq(name: &str) -> Coord {
    Coord::parse(name).unwrap()
}

#[test]
fn test_zobrist_keys_unique_and_nonzero() {
    let mut seen = std::collections::HashSet::new();

    for side in 0..2 {
        for kind in 0..6 {
            for square in 0..64 {
                let key = ZOBRIST.pieces[side][kind][square];
                assert_ne!(key, 0, "Zobrist keys must be nonzero");
                assert!(seen.insert(key), "Duplicate Zobrist key found");
            }
        }
    }
}

#[test]
fn test_seeded_tables_are_reproducible() {
    let a = ZobristKeys::from_rng(&mut StdRng::seed_from_u64(7));
    let b = ZobristKeys::from_rng(&mut StdRng::seed_from_u64(7));
    assert_eq!(a.pieces, b.pieces);
}

#[test]
fn test_zobrist_piece_key() {
    let key1 = ZOBRIST.piece_key(PieceKind::Pawn, Coord::new(0, 0), Side::White);
    let key2 = ZOBRIST.piece_key(PieceKind::Pawn, Coord::new(1, 0), Side::White);
    let key3 = ZOBRIST.piece_key(PieceKind::Pawn, Coord::new(0, 0), Side::Black);
    assert_ne!(key1, key2);
    assert_ne!(key1, key3);
    assert_eq!(ZOBRIST.piece_key(PieceKind::Pawn, Coord::new(8, 0), Side::White), 0);
}

#[test]
fn test_fingerprint_is_deterministic() {
    let board = Board::startpos();
    assert_eq!(fingerprint(&board), fingerprint(&board));
    assert_eq!(fingerprint(&board), fingerprint(&board.clone()));
}

#[test]
fn test_fingerprint_ignores_traversal_order() {
    let board = Board::startpos();
    let placements = board.placements();
    let forward = fingerprint_placements(placements.iter().copied());
    let backward = fingerprint_placements(placements.iter().rev().copied());

    let mut shuffled = placements.clone();
    shuffled.rotate_left(11);
    shuffled.swap(0, 20);

    assert_eq!(forward, fingerprint(&board));
    assert_eq!(forward, backward);
    assert_eq!(forward, fingerprint_placements(shuffled));
}

#[test]
fn test_empty_placement_hashes_to_zero() {
    assert_eq!(fingerprint_placements(std::iter::empty()), 0);
}

#[test]
fn test_fingerprint_changes_when_a_piece_moves() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
        "8/8/4k3/8/3K4/8/8/7R w - - 0 1",
        "k7/8/8/8/4P3/8/P7/1K6 w - - 0 1",
    ];
    for fen in fens {
        let board = Board::from_fen(fen).unwrap();
        let before = fingerprint(&board);
        for mv in board.possible_moves(board.turn()) {
            let mut child = board.clone();
            assert!(child.handle_move(mv));
            assert_ne!(before, fingerprint(&child), "{fen}: {mv} kept the fingerprint");
        }
    }
}

#[test]
fn test_fingerprint_ignores_side_to_move_and_castling() {
    let white = Board::from_fen("r3k3/8/8/8/8/8/8/R3K3 w Qq - 0 1").unwrap();
    let black = Board::from_fen("r3k3/8/8/8/8/8/8/R3K3 b - - 0 1").unwrap();
    assert_eq!(fingerprint(&white), fingerprint(&black));
}

#[test]
fn test_fingerprint_returns_after_knight_shuffle() {
    let mut board = Board::startpos();
    let start = fingerprint(&board);
    for (from, to) in [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")] {
        assert!(board.handle_move(Move::new(sq(from), sq(to))));
    }
    assert_eq!(fingerprint(&board), start);
}
