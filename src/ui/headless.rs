//! Plain-text front end: replays a list of columns and prints each outcome.

use std::io::{self, Write};

use crate::game::{GameSession, MoveOutcome, Transition};

use super::game_view::status_text;

/// Play `moves` (0-based, possibly out of range) on a fresh session, writing
/// one line per move and the final grid to `out`. Stops at the first invalid
/// column or once the game is over.
pub fn run_script<W: Write>(moves: &[i64], out: &mut W) -> io::Result<GameSession> {
    let mut session = GameSession::default();

    for (turn, &raw) in moves.iter().enumerate() {
        let column = match session.resolve_column(raw) {
            Ok(column) => column,
            Err(err) => {
                tracing::warn!(turn, %err, "script stopped");
                writeln!(out, "move {}: rejected: {err}", turn + 1)?;
                break;
            }
        };

        // resolve_column already bounds-checked the column
        let outcome = session.play_move(column).map_err(io::Error::other)?;
        match outcome {
            MoveOutcome::Placed {
                row,
                column,
                player,
                transition,
            } => {
                writeln!(out, "move {}: {player} -> ({row}, {column})", turn + 1)?;
                if transition != Transition::Continue {
                    break;
                }
            }
            rejected => {
                if let Some(err) = rejected.rejection() {
                    writeln!(out, "move {}: ignored: {err}", turn + 1)?;
                }
            }
        }
    }

    writeln!(out)?;
    write!(out, "{}", session.board())?;
    writeln!(out, "{}", status_text(&session))?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GamePhase, Player};

    fn run(moves: &[i64]) -> (GameSession, String) {
        let mut out = Vec::new();
        let session = run_script(moves, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_script_until_win() {
        let (session, output) = run(&[0, 1, 0, 1, 0, 1, 0, 6, 6]);
        assert_eq!(session.phase(), GamePhase::Won(Player::One));
        // Moves after the win are not attempted
        assert_eq!(session.moves_played(), 7);
        assert!(output.contains("move 7: Player 1 -> (2, 0)"));
        assert!(output.ends_with("Player 1 won!\n"));
    }

    #[test]
    fn test_script_stops_on_invalid_column() {
        let (session, output) = run(&[3, -1, 4]);
        assert_eq!(session.moves_played(), 1);
        assert!(output.contains("move 2: rejected: column -1 is out of range (board has 7 columns)"));
        assert!(output.ends_with("Player 2's turn\n"));
    }

    #[test]
    fn test_script_reports_full_column() {
        let (session, output) = run(&[5, 5, 5, 5, 5, 5, 5, 2]);
        assert!(output.contains("move 7: ignored: column 5 is full"));
        assert_eq!(session.moves_played(), 7);
        assert_eq!(session.cell(5, 2), crate::game::Cell::Occupied(Player::One));
    }
}
