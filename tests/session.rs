use connect_four::error::MoveError;
use connect_four::game::{
    check_tie, check_win, Board, Cell, GamePhase, GameSession, MoveOutcome, Player, Transition,
    HEIGHT, WIDTH,
};

/// Deterministic column sequence that wanders over the board.
fn scripted_columns(seed: usize, len: usize) -> Vec<usize> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = (state * 31 + 17) % 9973;
            state % WIDTH
        })
        .collect()
}

fn cells(session: &GameSession) -> Vec<Cell> {
    (0..HEIGHT)
        .flat_map(|row| (0..WIDTH).map(move |col| (row, col)))
        .map(|(row, col)| session.cell(row, col))
        .collect()
}

#[test]
fn vertical_four_wins() {
    let mut board = Board::default();
    for _ in 0..4 {
        board.apply_move(0, Player::One).unwrap();
    }
    assert!(check_win(&board, Player::One));
}

#[test]
fn bottom_row_four_wins() {
    let mut session = GameSession::default();
    for col in [0, 0, 1, 1, 2, 2] {
        session.play_move(col).unwrap();
    }
    let outcome = session.play_move(3).unwrap();

    for col in 0..4 {
        assert_eq!(session.cell(5, col), Cell::Occupied(Player::One));
    }
    assert!(check_win(session.board(), Player::One));
    assert_eq!(
        outcome,
        MoveOutcome::Placed {
            row: 5,
            column: 3,
            player: Player::One,
            transition: Transition::Win(Player::One),
        }
    );
}

#[test]
fn full_board_without_four_is_tied() {
    // Column order fills the board in the "1122112" / "2211221" pattern.
    let mut session = GameSession::default();
    let order = [0, 2, 1, 3, 4, 6, 5];
    let mut last = None;
    for _ in 0..HEIGHT {
        for col in order {
            last = Some(session.play_move(col).unwrap());
        }
    }

    assert!(session.board().is_full());
    assert!(!check_win(session.board(), Player::One));
    assert!(!check_win(session.board(), Player::Two));
    assert!(check_tie(session.board(), Player::Two));
    assert_eq!(session.phase(), GamePhase::Tied);
    assert!(matches!(
        last,
        Some(MoveOutcome::Placed {
            transition: Transition::Tie,
            ..
        })
    ));
}

#[test]
fn out_of_range_columns_are_rejected() {
    let mut session = GameSession::default();
    session.play_move(2).unwrap();
    let before = session.clone();

    assert_eq!(
        session.resolve_column(-1),
        Err(MoveError::InvalidColumn {
            column: -1,
            width: WIDTH
        })
    );
    assert_eq!(
        session.play_move(WIDTH),
        Err(MoveError::InvalidColumn {
            column: WIDTH as i64,
            width: WIDTH
        })
    );
    assert_eq!(session, before);
}

#[test]
fn each_placement_fills_exactly_one_empty_cell() {
    for seed in 0..20 {
        let mut session = GameSession::default();
        for col in scripted_columns(seed, 60) {
            let before = cells(&session);
            let landing = session.board().lowest_empty_row(col).unwrap();

            match session.play_move(col).unwrap() {
                MoveOutcome::Placed { row, column, .. } => {
                    assert_eq!(Some(row), landing);
                    assert_eq!(column, col);
                    let after = cells(&session);
                    let changed: Vec<usize> =
                        (0..before.len()).filter(|&i| before[i] != after[i]).collect();
                    assert_eq!(changed, vec![row * WIDTH + column]);
                    assert_eq!(before[row * WIDTH + column], Cell::Empty);
                }
                MoveOutcome::ColumnFull { .. } => {
                    assert_eq!(landing, None);
                    assert_eq!(cells(&session), before);
                }
                MoveOutcome::GameOver => {
                    assert!(session.is_terminal());
                    assert_eq!(cells(&session), before);
                }
            }
        }
    }
}

#[test]
fn players_alternate_until_the_game_ends() {
    for seed in 0..20 {
        let mut session = GameSession::default();
        for col in scripted_columns(seed, 60) {
            let mover = session.active_player();
            let phase = session.phase();
            match session.play_move(col).unwrap() {
                MoveOutcome::Placed {
                    player, transition, ..
                } => {
                    assert_eq!(player, mover);
                    match transition {
                        Transition::Continue => assert_eq!(session.active_player(), mover.other()),
                        Transition::Win(winner) => {
                            assert_eq!(winner, mover);
                            assert_eq!(session.active_player(), mover);
                            assert_eq!(session.phase(), GamePhase::Won(mover));
                        }
                        Transition::Tie => {
                            assert_eq!(session.active_player(), mover);
                            assert_eq!(session.phase(), GamePhase::Tied);
                        }
                    }
                }
                MoveOutcome::ColumnFull { .. } | MoveOutcome::GameOver => {
                    assert_eq!(session.active_player(), mover);
                    assert_eq!(session.phase(), phase);
                }
            }
        }
    }
}

#[test]
fn sessions_are_independent() {
    let mut first = GameSession::default();
    let second = GameSession::default();
    first.play_move(4).unwrap();

    assert_eq!(first.cell(5, 4), Cell::Occupied(Player::One));
    assert_eq!(second.cell(5, 4), Cell::Empty);
    assert_eq!(second.active_player(), Player::One);
}
