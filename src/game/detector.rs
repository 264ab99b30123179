//! Terminal-state detection: four-in-a-row and full-board ties.

use super::{Board, Cell, Player};

/// Number of same-player cells needed in a line to win.
pub const CONNECT: usize = 4;

/// Line directions scanned from every origin cell, as (dx, dy) with y
/// growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (-1, 1),
        }
    }
}

/// Check whether `player` has four in a row anywhere on the board.
pub fn check_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Check for a tie after `mover` played: the board is full and the last move
/// did not win. Win is always checked first.
pub fn check_tie(board: &Board, mover: Player) -> bool {
    board.is_full() && !check_win(board, mover)
}

/// First winning line for `player` as (row, column) coordinates, scanning
/// origins top-left to bottom-right and directions in [`Direction::ALL`] order.
pub fn winning_line(board: &Board, player: Player) -> Option<[(usize, usize); CONNECT]> {
    for row in 0..board.height() {
        for col in 0..board.width() {
            for direction in Direction::ALL {
                if let Some(line) = line_from(board, player, row, col, direction) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// The four cells starting at (row, col) in `direction`, if all are in
/// bounds and owned by `player`.
fn line_from(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    direction: Direction,
) -> Option<[(usize, usize); CONNECT]> {
    let (dx, dy) = direction.delta();
    let mut line = [(0, 0); CONNECT];
    for (step, slot) in line.iter_mut().enumerate() {
        let r = row as isize + dy * step as isize;
        let c = col as isize + dx * step as isize;
        if board.get_checked(r, c)? != Cell::Occupied(player) {
            return None;
        }
        *slot = (r as usize, c as usize);
    }
    Some(line)
}
