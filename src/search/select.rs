use crate::board::{Board, Move};
use crate::search::alphabeta::{SearchParams, Searcher};

pub const CENTER: Move = Move::new(1, 1);
/// Corner preference order.
pub const CORNERS: [Move; 4] = [Move::new(0, 0), Move::new(0, 2), Move::new(2, 0), Move::new(2, 2)];

/// Root moves sharing the best score seen so far, in the order offered.
/// Lives for a single selection.
#[derive(Debug, Default, Clone)]
pub struct CandidateSet {
    best: Option<i32>,
    moves: Vec<Move>,
}

impl CandidateSet {
    pub fn new() -> Self { Self::default() }

    pub fn offer(&mut self, mv: Move, score: i32) {
        match self.best {
            Some(b) if score < b => {}
            Some(b) if score == b => self.moves.push(mv),
            _ => {
                self.best = Some(score);
                self.moves.clear();
                self.moves.push(mv);
            }
        }
    }

    pub fn best_score(&self) -> Option<i32> { self.best }
    pub fn moves(&self) -> &[Move] { &self.moves }
}

/// Center, then the first corner in `CORNERS` order, then the first
/// candidate (an edge).
pub fn tie_break(candidates: &[Move]) -> Option<Move> {
    if candidates.contains(&CENTER) {
        return Some(CENTER);
    }
    if let Some(&corner) = CORNERS.iter().find(|c| candidates.contains(*c)) {
        return Some(corner);
    }
    candidates.first().copied()
}

/// Best move for X: `None` only when no cell is empty.
pub fn select_best_move(board: &Board) -> Option<Move> {
    Searcher::default().search_with_params(board, SearchParams::default()).bestmove
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_set_keeps_all_ties_in_order() {
        let mut set = CandidateSet::new();
        set.offer(Move::new(0, 1), 0);
        set.offer(Move::new(0, 2), -3);
        set.offer(Move::new(1, 0), 0);
        assert_eq!(set.moves(), &[Move::new(0, 1), Move::new(1, 0)]);
        set.offer(Move::new(2, 2), 8);
        assert_eq!(set.moves(), &[Move::new(2, 2)]);
        assert_eq!(set.best_score(), Some(8));
    }

    #[test]
    fn tie_break_tiers() {
        assert_eq!(tie_break(&[Move::new(0, 1), Move::new(2, 2), Move::new(1, 1)]), Some(CENTER));
        assert_eq!(tie_break(&[Move::new(0, 1), Move::new(2, 2), Move::new(2, 0)]), Some(Move::new(2, 0)));
        assert_eq!(tie_break(&[Move::new(1, 2), Move::new(0, 1)]), Some(Move::new(1, 2)));
        assert_eq!(tie_break(&[]), None);
    }
}
