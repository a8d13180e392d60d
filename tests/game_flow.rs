use tictacbot::board::{Board, Mark, Move};
use tictacbot::game::{Game, GameStatus};
use tictacbot::Error;

#[test]
fn engine_opens_and_hands_over_the_turn() {
    let mut g = Game::new();
    assert_eq!(g.play_engine().unwrap(), Some(Move::new(1, 1)));
    assert_eq!(g.status(), GameStatus::InProgress);
    assert_eq!(g.to_move(), Mark::O);
    assert!(matches!(g.play_engine(), Err(Error::NotEngineTurn)));
    assert!(matches!(g.play(Move::new(1, 1)), Err(Error::CellOccupied { row: 1, col: 1 })));
    assert_eq!(g.history(), &[Move::new(1, 1)]);
}

#[test]
fn finished_game_refuses_moves() {
    let mut g = Game::new();
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        assert_eq!(g.play(Move::new(r, c)).unwrap(), GameStatus::InProgress);
    }
    assert_eq!(g.play(Move::new(0, 2)).unwrap(), GameStatus::XWon);
    assert!(g.is_over());
    assert!(matches!(g.play(Move::new(2, 2)), Err(Error::GameOver)));
    assert!(matches!(g.play_engine(), Err(Error::GameOver)));
}

#[test]
fn engine_against_scan_order_opponent_does_not_lose() {
    let mut g = Game::new();
    while !g.is_over() {
        if g.to_move() == Mark::X {
            g.play_engine().unwrap();
        } else {
            let mv = g.board().empty_cells().next().unwrap();
            g.play(mv).unwrap();
        }
    }
    assert_ne!(g.status(), GameStatus::OWon);
}

#[test]
fn from_board_validates_and_classifies() {
    let drawn: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(Game::from_board(drawn).unwrap().status(), GameStatus::Drawn);
    let mut bad = Board::empty();
    bad.set(Move::new(0, 0), Mark::O);
    assert!(matches!(Game::from_board(bad), Err(Error::InvalidPieceCounts { .. })));
}
