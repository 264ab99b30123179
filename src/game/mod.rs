//! Core Connect Four rules: board and drop physics, win/tie detection, and
//! the per-game session that drives turns and phases.

mod board;
pub mod detector;
mod player;
mod session;

pub use board::{Board, Cell, HEIGHT, WIDTH};
pub use detector::{check_tie, check_win, winning_line};
pub use player::Player;
pub use session::{GamePhase, GameSession, MoveOutcome, Transition};
