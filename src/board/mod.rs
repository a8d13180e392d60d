pub mod grid;
pub mod notation;

pub use grid::{Board, Mark, Move, CELLS, SIZE};
