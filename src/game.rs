use serde::Serialize;
use crate::board::{Board, Mark, Move};
use crate::error::{Error, Result};
use crate::search::eval::{evaluate, Outcome};
use crate::search::select::select_best_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Drawn,
}

impl From<Outcome> for GameStatus {
    fn from(o: Outcome) -> Self {
        match o {
            Outcome::Ongoing => GameStatus::InProgress,
            Outcome::XWins => GameStatus::XWon,
            Outcome::OWins => GameStatus::OWon,
            Outcome::Draw => GameStatus::Drawn,
        }
    }
}

/// Alternates X (engine side) and O, re-evaluating after every half-move.
/// Once decided, further moves are refused.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    status: GameStatus,
    history: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self { Self::new() }
}

impl Game {
    pub fn new() -> Self {
        Self { board: Board::empty(), status: GameStatus::InProgress, history: Vec::new() }
    }

    /// Resume from a validated board.
    pub fn from_board(board: Board) -> Result<Self> {
        board.validate()?;
        Ok(Self { board, status: evaluate(&board).into(), history: Vec::new() })
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn status(&self) -> GameStatus { self.status }
    pub fn history(&self) -> &[Move] { &self.history }
    pub fn to_move(&self) -> Mark { self.board.side_to_move() }
    pub fn is_over(&self) -> bool { self.status != GameStatus::InProgress }

    /// Apply a move for the side to move.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        let side = self.to_move();
        self.board.place(mv, side)?;
        self.history.push(mv);
        self.status = evaluate(&self.board).into();
        Ok(self.status)
    }

    /// Ask the selector for X's move and apply it. `Ok(None)` means no cell
    /// was left, which cannot happen while the game is in progress.
    pub fn play_engine(&mut self) -> Result<Option<Move>> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if self.to_move() != Mark::X {
            return Err(Error::NotEngineTurn);
        }
        match select_best_move(&self.board) {
            Some(mv) => {
                self.play(mv)?;
                Ok(Some(mv))
            }
            None => Ok(None),
        }
    }
}
