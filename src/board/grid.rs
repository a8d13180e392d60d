use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// Side length of the grid. Line enumeration in `search::eval` is written out
/// for this size only.
pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    /// Searching side, moves first.
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

    pub fn from_index(idx: usize) -> Self { Self { row: idx / SIZE, col: idx % SIZE } }

    pub fn index(self) -> usize { self.row * SIZE + self.col }

    pub fn in_bounds(self) -> bool { self.row < SIZE && self.col < SIZE }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELLS],
}

impl Board {
    pub fn empty() -> Self { Self::default() }

    pub fn from_cells(cells: [Mark; CELLS]) -> Self { Self { cells } }

    pub fn cells(&self) -> &[Mark; CELLS] { &self.cells }

    /// `mv` must be in bounds; use `place` for unchecked input.
    pub fn get(&self, mv: Move) -> Mark {
        debug_assert!(mv.in_bounds(), "move {mv} off the board");
        self.cells[mv.index()]
    }

    /// Write `mark` into the cell without any legality check. `mv` must be in bounds.
    pub fn set(&mut self, mv: Move, mark: Mark) {
        debug_assert!(mv.in_bounds(), "move {mv} off the board");
        self.cells[mv.index()] = mark;
    }

    /// Copy of this board with `mark` placed at `mv`.
    pub fn with(&self, mv: Move, mark: Mark) -> Self {
        let mut child = *self;
        child.set(mv, mark);
        child
    }

    /// Place a mark after checking bounds and emptiness.
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<()> {
        if !mv.in_bounds() {
            return Err(Error::OutOfBounds { row: mv.row, col: mv.col });
        }
        if self.get(mv) != Mark::Empty {
            return Err(Error::CellOccupied { row: mv.row, col: mv.col });
        }
        self.set(mv, mark);
        Ok(())
    }

    /// Empty cells in row-major scan order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Mark::Empty)
            .map(|(i, _)| Move::from_index(i))
    }

    pub fn empty_count(&self) -> usize { self.cells.iter().filter(|&&c| c == Mark::Empty).count() }

    pub fn is_full(&self) -> bool { self.empty_count() == 0 }

    pub fn count(&self, mark: Mark) -> usize { self.cells.iter().filter(|&&c| c == mark).count() }

    /// X moves first, so X is to move whenever the counts are equal.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) { Mark::O } else { Mark::X }
    }

    /// Check the invariants the search relies on. The search does not call
    /// this; callers handing boards to the engine must.
    pub fn validate(&self) -> Result<()> {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        if x_count < o_count || x_count - o_count > 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }
        if crate::search::eval::has_line(self, Mark::X) && crate::search::eval::has_line(self, Mark::O) {
            return Err(Error::ConflictingWinners);
        }
        Ok(())
    }
}
