//! Terminal UI: a ratatui front end that maps key presses to columns and
//! renders whatever the game session reports back, plus a plain-text replay
//! mode for scripted games.

mod app;
pub mod game_view;
pub mod headless;

pub use app::App;
