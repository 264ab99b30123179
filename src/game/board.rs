use std::fmt;

use super::Player;
use crate::error::MoveError;

pub const HEIGHT: usize = 6;
pub const WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Grid of `height` rows by `width` columns. Row 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Like [`Board::get`], but `None` for coordinates off the grid.
    pub fn get_checked(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.get(row, col))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Row where a piece dropped into `col` would land, scanning from the
    /// bottom up. `Ok(None)` means the column is full.
    pub fn lowest_empty_row(&self, col: usize) -> Result<Option<usize>, MoveError> {
        self.check_column(col)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.get(row, col).is_empty()))
    }

    /// Drop a piece in a column, returns the (row, column) where it landed.
    /// The board is left untouched on error.
    pub fn apply_move(&mut self, col: usize, player: Player) -> Result<(usize, usize), MoveError> {
        let row = self
            .lowest_empty_row(col)?
            .ok_or(MoveError::ColumnFull { column: col })?;
        let idx = self.index(row, col);
        self.cells[idx] = player.to_cell();
        Ok((row, col))
    }

    fn check_column(&self, col: usize) -> Result<(), MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: i64::try_from(col).unwrap_or(i64::MAX),
                width: self.width,
            });
        }
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) out of bounds for {}x{} board",
            self.height,
            self.width
        );
        row * self.width + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let line: Vec<String> = (0..self.width)
                .map(|col| match self.get(row, col) {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(player) => player.id().to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
