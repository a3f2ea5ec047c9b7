use super::*;

#[test]
fn random_agent_returns_legal_move() {
    let mut agent = RandomAgent::new(Side::White);
    let board = Board::startpos();

    let mv = agent.choose_action(&board);

    assert!(mv.is_some());
    assert!(board.possible_moves(Side::White).contains(&mv.unwrap()));
}

#[test]
fn random_agent_handles_checkmate() {
    let mut agent = RandomAgent::new(Side::Black);
    let board =
        Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    assert!(agent.choose_action(&board).is_none());
}

#[test]
fn random_agent_handles_stalemate() {
    let mut agent = RandomAgent::new(Side::Black);
    let board = Board::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    assert!(agent.choose_action(&board).is_none());
}

#[test]
fn random_agent_seed_is_reproducible() {
    let board = Board::startpos();
    let mut a = RandomAgent::with_seed(Side::White, 42);
    let mut b = RandomAgent::with_seed(Side::White, 42);

    for _ in 0..10 {
        assert_eq!(a.choose_action(&board), b.choose_action(&board));
    }
}

#[test]
fn random_agent_waits_for_its_turn() {
    let mut agent = RandomAgent::with_seed(Side::Black, 1);
    assert!(agent.choose_action(&Board::startpos()).is_none());
}
