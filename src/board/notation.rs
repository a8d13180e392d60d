// Text notation for boards ("X.O/.X./..O") and moves ("r,c").
use std::fmt;
use std::str::FromStr;
use crate::error::{Error, Result};
use super::grid::{Board, Mark, Move, CELLS, SIZE};

impl Board {
    pub fn from_notation(s: &str) -> Result<Self> {
        let raw = s.trim();
        let mut cells = [Mark::Empty; CELLS];
        let mut n = 0usize;
        for ch in raw.chars() {
            let mark = match ch {
                '/' => continue,
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '-' | '_' => Mark::Empty,
                other => {
                    return Err(Error::InvalidCellCharacter { character: other, position: n, context: raw.to_string() })
                }
            };
            if n < CELLS { cells[n] = mark; }
            n += 1;
        }
        if n != CELLS {
            return Err(Error::InvalidBoardLength { expected: CELLS, got: n, context: raw.to_string() });
        }
        let board = Board::from_cells(cells);
        board.validate()?;
        Ok(board)
    }

    pub fn notation(&self) -> String {
        let mut out = String::with_capacity(CELLS + SIZE - 1);
        for (i, c) in self.cells().iter().enumerate() {
            if i > 0 && i % SIZE == 0 { out.push('/'); }
            out.push(c.symbol());
        }
        out
    }
}

impl FromStr for Board {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> { Board::from_notation(s) }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            let line: Vec<String> = (0..SIZE).map(|col| self.get(Move::new(row, col)).symbol().to_string()).collect();
            writeln!(f, " {}", line.join(" | "))?;
            if row + 1 < SIZE { writeln!(f, "---+---+---")?; }
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits: Vec<char> = s.trim().chars().filter(|c| !matches!(c, ',' | ' ')).collect();
        let bad = || Error::InvalidMoveNotation(s.to_string());
        if digits.len() != 2 { return Err(bad()); }
        let row = digits[0].to_digit(10).ok_or_else(bad)? as usize;
        let col = digits[1].to_digit(10).ok_or_else(bad)? as usize;
        let mv = Move::new(row, col);
        if !mv.in_bounds() { return Err(Error::OutOfBounds { row, col }); }
        Ok(mv)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{},{}", self.row, self.col) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_with_and_without_separators() {
        let a: Board = "X.O/.X./..O".parse().unwrap();
        let b: Board = "x.o.x...o".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get(Move::new(0, 2)), Mark::O);
        assert_eq!(a.notation(), "X.O/.X./..O");
    }

    #[test]
    fn rejects_bad_length_and_characters() {
        assert!(matches!(Board::from_notation("X.O/.X."), Err(Error::InvalidBoardLength { got: 6, .. })));
        assert!(matches!(Board::from_notation("X.O/.Z./..O"), Err(Error::InvalidCellCharacter { character: 'Z', .. })));
    }

    #[test]
    fn bad_character_reports_cell_index() {
        // separators are not cells
        let err = Board::from_notation("XO./.Z./...").unwrap_err();
        assert!(matches!(err, Error::InvalidCellCharacter { character: 'Z', position: 4, .. }));
        assert!(err.to_string().contains("at cell 4"));
    }

    #[test]
    fn rejects_malformed_positions() {
        assert!(matches!(Board::from_notation("OO./.../..."), Err(Error::InvalidPieceCounts { .. })));
        assert!(matches!(Board::from_notation("XXX/OOO/..."), Err(Error::ConflictingWinners)));
    }

    #[test]
    fn move_notation() {
        assert_eq!("1,2".parse::<Move>().unwrap(), Move::new(1, 2));
        assert_eq!("02".parse::<Move>().unwrap(), Move::new(0, 2));
        assert_eq!("2 0".parse::<Move>().unwrap(), Move::new(2, 0));
        assert_eq!(Move::new(2, 1).to_string(), "2,1");
        assert!(matches!("3,0".parse::<Move>(), Err(Error::OutOfBounds { row: 3, col: 0 })));
        assert!(matches!("a,b".parse::<Move>(), Err(Error::InvalidMoveNotation(_))));
    }
}
