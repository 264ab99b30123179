use super::detector::{check_tie, check_win};
use super::{Board, Cell, Player, HEIGHT, WIDTH};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    InProgress,
    Won(Player),
    Tied,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        self != GamePhase::InProgress
    }
}

/// What a successful placement did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Win(Player),
    Tie,
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed {
        row: usize,
        column: usize,
        player: Player,
        transition: Transition,
    },
    /// The column has no empty cell; nothing changed.
    ColumnFull { column: usize },
    /// The game already ended; nothing changed.
    GameOver,
}

impl MoveOutcome {
    /// The recoverable error behind a rejected move, if any.
    pub fn rejection(self) -> Option<MoveError> {
        match self {
            MoveOutcome::Placed { .. } => None,
            MoveOutcome::ColumnFull { column } => Some(MoveError::ColumnFull { column }),
            MoveOutcome::GameOver => Some(MoveError::GameOver),
        }
    }
}

/// One game of Connect Four: the grid, whose turn it is, and the phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    active_player: Player,
    phase: GamePhase,
}

impl GameSession {
    /// Start a game on an empty `width` x `height` grid with player 1 to move.
    pub fn new(width: usize, height: usize) -> Self {
        GameSession {
            board: Board::new(width, height),
            active_player: Player::One,
            phase: GamePhase::InProgress,
        }
    }

    /// Discard the current game and start over with the same dimensions.
    pub fn reset(&mut self) {
        *self = GameSession::new(self.board.width(), self.board.height());
        tracing::debug!("session reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.board.get(row, column)
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn moves_played(&self) -> usize {
        self.board.occupied_count()
    }

    /// Columns that still accept a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Check a signed column index from an outer layer against the grid width.
    pub fn resolve_column(&self, raw: i64) -> Result<usize, MoveError> {
        let width = self.board.width();
        usize::try_from(raw)
            .ok()
            .filter(|&col| col < width)
            .ok_or(MoveError::InvalidColumn { column: raw, width })
    }

    /// Drop the active player's piece into `column`.
    ///
    /// A terminal session answers [`MoveOutcome::GameOver`] and a full column
    /// [`MoveOutcome::ColumnFull`]; neither mutates anything. An out-of-range
    /// column is a caller error. On placement the mover is checked for a win
    /// first, then the grid for fullness; the turn passes only if neither hit.
    pub fn play_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            tracing::debug!(column, phase = ?self.phase, "move rejected, game is over");
            return Ok(MoveOutcome::GameOver);
        }

        let player = self.active_player;
        let (row, column) = match self.board.apply_move(column, player) {
            Ok(placed) => placed,
            Err(MoveError::ColumnFull { column }) => {
                tracing::debug!(column, "move rejected, column is full");
                return Ok(MoveOutcome::ColumnFull { column });
            }
            Err(err) => return Err(err),
        };

        let transition = if check_win(&self.board, player) {
            self.phase = GamePhase::Won(player);
            Transition::Win(player)
        } else if check_tie(&self.board, player) {
            self.phase = GamePhase::Tied;
            Transition::Tie
        } else {
            self.active_player = player.other();
            Transition::Continue
        };

        tracing::debug!(row, column, player = player.id(), ?transition, "piece placed");
        if self.is_terminal() {
            tracing::info!(phase = ?self.phase, moves = self.moves_played(), "game finished");
        }

        Ok(MoveOutcome::Placed {
            row,
            column,
            player,
            transition,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
