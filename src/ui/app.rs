use crate::config::UiConfig;
use crate::game::{GameSession, MoveOutcome, Transition};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    session: GameSession,
    selected_column: usize,
    start_column: usize,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        let session = GameSession::default();
        let start_column = config.initial_column().min(session.board().width() - 1);
        App {
            session,
            selected_column: start_column,
            start_column,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let last_column = self.session.board().width() - 1;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < last_column {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col <= last_column {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.session.play_move(self.selected_column) {
            Ok(outcome) => self.show_outcome(outcome),
            Err(err) => {
                tracing::warn!(%err, "selector pointed outside the board");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Turn a move outcome into the message line.
    fn show_outcome(&mut self, outcome: MoveOutcome) {
        self.message = match outcome {
            MoveOutcome::Placed { transition, .. } => match transition {
                Transition::Win(player) => Some(format!("{} won!", player.name())),
                Transition::Tie => Some("It's a TIE!".to_string()),
                Transition::Continue => None,
            },
            MoveOutcome::ColumnFull { .. } => Some("Column is full!".to_string()),
            MoveOutcome::GameOver => Some("Game over! Press 'r' to restart.".to_string()),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}
