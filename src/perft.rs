// Game-tree enumeration: perft counts, finished-game tallies, reachable boards.
use std::collections::HashSet;
use serde::Serialize;
use crate::board::Board;
use crate::search::eval::{evaluate, Outcome};

/// Number of move sequences of length `depth` from `board`. Finished games
/// have no moves.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if evaluate(board).is_terminal() { return 0; }
    let side = board.side_to_move();
    let mut nodes = 0u64;
    for mv in board.empty_cells() {
        let child = board.with(mv, side);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameCounts {
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl GameCounts {
    pub fn total(&self) -> u64 { self.x_wins + self.o_wins + self.draws }

    fn add(&mut self, other: GameCounts) {
        self.x_wins += other.x_wins;
        self.o_wins += other.o_wins;
        self.draws += other.draws;
    }
}

/// Every complete game playable from `board`, tallied by result.
pub fn count_games(board: &Board) -> GameCounts {
    let mut counts = GameCounts::default();
    match evaluate(board) {
        Outcome::XWins => counts.x_wins = 1,
        Outcome::OWins => counts.o_wins = 1,
        Outcome::Draw => counts.draws = 1,
        Outcome::Ongoing => {
            let side = board.side_to_move();
            for mv in board.empty_cells() {
                counts.add(count_games(&board.with(mv, side)));
            }
        }
    }
    counts
}

/// Distinct boards reachable from `board` (inclusive), in discovery order.
pub fn reachable_positions(board: &Board) -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut stack = vec![*board];
    while let Some(b) = stack.pop() {
        if !seen.insert(b) { continue; }
        out.push(b);
        if evaluate(&b).is_terminal() { continue; }
        let side = b.side_to_move();
        for mv in b.empty_cells() {
            let child = b.with(mv, side);
            if !seen.contains(&child) { stack.push(child); }
        }
    }
    out
}
