//! # Connect Four
//!
//! Two-player Connect Four: a rules engine with explicit game sessions and a
//! terminal front end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, win/tie detection, session state machine
//! - [`ui`]: Terminal UI: key handling and the game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
