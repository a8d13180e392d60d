use serde::{Deserialize, Serialize};
use crate::board::{Board, Mark};

pub type Line = [usize; 3];

/// Rows, then columns, then the two diagonals. Cell indices are row-major.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

// Score helpers (X's perspective)
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool { self != Outcome::Ongoing }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            _ => None,
        }
    }

    /// Short protocol token.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ongoing => "ongoing",
            Outcome::XWins => "x",
            Outcome::OWins => "o",
            Outcome::Draw => "draw",
        }
    }
}

/// First completed line in `LINES` order, with the mark that holds it.
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    let cells = board.cells();
    let mut found = None;
    for line in LINES {
        let first = cells[line[0]];
        if first != Mark::Empty && first == cells[line[1]] && first == cells[line[2]] && found.is_none() {
            found = Some((first, line));
        }
    }
    found
}

pub fn has_line(board: &Board, mark: Mark) -> bool {
    let cells = board.cells();
    LINES.iter().any(|line| line.iter().all(|&i| cells[i] == mark))
}

pub fn evaluate(board: &Board) -> Outcome {
    match winning_line(board) {
        Some((Mark::X, _)) => Outcome::XWins,
        Some((Mark::O, _)) => Outcome::OWins,
        _ if board.is_full() => Outcome::Draw,
        _ => Outcome::Ongoing,
    }
}

/// Score of a finished game reached `depth` plies below the root: faster X
/// wins and slower X losses score higher. `None` while the game is ongoing.
pub fn terminal_score(outcome: Outcome, depth: i32) -> Option<i32> {
    match outcome {
        Outcome::XWins => Some(WIN_SCORE - depth),
        Outcome::OWins => Some(depth - WIN_SCORE),
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::Ongoing => None,
    }
}
