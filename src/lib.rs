// Perfect-play tic-tac-toe engine: alpha-beta minimax with a positional tie-break
pub mod board;
pub mod error;
pub mod game;
pub mod perft;
pub mod protocol;
pub mod search;
pub mod selfplay;

pub use board::{Board, Mark, Move};
pub use error::{Error, Result};
pub use search::eval::{evaluate, Outcome};
pub use search::select::select_best_move;
