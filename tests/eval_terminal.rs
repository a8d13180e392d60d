use tictacbot::board::{Board, Mark, CELLS};
use tictacbot::search::eval::{evaluate, terminal_score, winning_line, Outcome, LINES};

fn board_with_line(line: [usize; 3], mark: Mark) -> Board {
    let mut cells = [Mark::Empty; CELLS];
    for i in line { cells[i] = mark; }
    Board::from_cells(cells)
}

#[test]
fn every_line_wins_for_x() {
    for line in LINES {
        let b = board_with_line(line, Mark::X);
        assert_eq!(evaluate(&b), Outcome::XWins, "line {:?} not detected for X", line);
        assert_eq!(winning_line(&b), Some((Mark::X, line)));
    }
}

#[test]
fn every_line_wins_for_o() {
    for line in LINES {
        let b = board_with_line(line, Mark::O);
        assert_eq!(evaluate(&b), Outcome::OWins, "line {:?} not detected for O", line);
    }
}

#[test]
fn full_board_without_line_is_draw() {
    let b: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(evaluate(&b), Outcome::Draw);
    assert_eq!(winning_line(&b), None);
}

#[test]
fn partial_board_without_line_is_ongoing() {
    assert_eq!(evaluate(&Board::empty()), Outcome::Ongoing);
    let b: Board = "X../.O./..X".parse().unwrap();
    assert_eq!(evaluate(&b), Outcome::Ongoing);
}

#[test]
fn full_board_with_line_is_a_win_not_a_draw() {
    let b: Board = "XXX/OOX/OXO".parse().unwrap();
    assert_eq!(evaluate(&b), Outcome::XWins);
}

#[test]
fn first_line_in_scan_order_is_reported() {
    // Row 0 and the main diagonal are both complete; rows come first.
    let b: Board = "XXX/OXO/OOX".parse().unwrap();
    assert_eq!(winning_line(&b), Some((Mark::X, [0, 1, 2])));
}

#[test]
fn terminal_scores_prefer_fast_wins_and_slow_losses() {
    assert_eq!(terminal_score(Outcome::XWins, 0), Some(10));
    assert!(terminal_score(Outcome::XWins, 0) > terminal_score(Outcome::XWins, 2));
    assert_eq!(terminal_score(Outcome::OWins, 1), Some(-9));
    assert!(terminal_score(Outcome::OWins, 3) > terminal_score(Outcome::OWins, 1));
    assert_eq!(terminal_score(Outcome::Draw, 5), Some(0));
    assert_eq!(terminal_score(Outcome::Ongoing, 0), None);
}
