use abreast::{
    BoardError, Cell, Command, Event, GameConfig, GameEngine, GameError, GameStatus, Player, Pos,
};

fn engine(size: usize, run: usize) -> GameEngine {
    GameEngine::new(GameConfig::new(size, run).unwrap())
}

/// Walk the cursor to `target` and confirm there.
fn play(engine: &mut GameEngine, target: (usize, usize)) -> Result<Event, GameError> {
    while engine.board().cursor_pos().row != target.0 {
        engine.apply(Command::MoveDown).unwrap();
    }
    while engine.board().cursor_pos().col != target.1 {
        engine.apply(Command::MoveRight).unwrap();
    }
    engine.apply(Command::Confirm)
}

#[test]
fn test_cursor_commands_report_new_position() {
    let mut engine = engine(3, 3);
    assert_eq!(
        engine.apply(Command::MoveUp),
        Ok(Event::CursorMoved(Pos::new(0, 1)))
    );
    assert_eq!(
        engine.apply(Command::MoveUp),
        Ok(Event::CursorMoved(Pos::new(2, 1)))
    );
    assert_eq!(
        engine.apply(Command::MoveLeft),
        Ok(Event::CursorMoved(Pos::new(2, 0)))
    );
    assert_eq!(engine.moves(), 0);
}

#[test]
fn test_turn_passes_after_plain_move() {
    let mut engine = engine(3, 3);
    assert_eq!(
        play(&mut engine, (1, 1)),
        Ok(Event::Placed {
            player: Player::Cross,
            pos: Pos::new(1, 1)
        })
    );
    assert_eq!(engine.board().active_player(), Player::Circle);
    assert_eq!(
        play(&mut engine, (0, 0)),
        Ok(Event::Placed {
            player: Player::Circle,
            pos: Pos::new(0, 0)
        })
    );
    assert_eq!(engine.board().active_player(), Player::Cross);
    assert_eq!(engine.moves(), 2);
}

#[test]
fn test_illegal_move_keeps_turn() {
    let mut engine = engine(3, 3);
    engine.apply(Command::Confirm).unwrap();
    let before = engine.state();

    let err = engine.apply(Command::Confirm).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalMove(BoardError::Occupied { row: 1, col: 1 })
    );
    assert_eq!(err.to_string(), "Impossible to make this move");
    assert_eq!(engine.state(), before);
    assert_eq!(engine.board().active_player(), Player::Circle);
    assert_eq!(engine.moves(), 1);
}

#[test]
fn test_invalid_command_is_reported() {
    let mut engine = engine(3, 3);
    let before = engine.state();
    let err = engine.apply(Command::Invalid).unwrap_err();
    assert_eq!(err, GameError::InvalidCommand);
    assert_eq!(err.to_string(), "Press arrows or space");
    assert_eq!(engine.state(), before);
}

#[test]
fn test_win_ends_game_without_toggling() {
    let mut engine = engine(5, 3);
    play(&mut engine, (0, 0)).unwrap();
    play(&mut engine, (1, 0)).unwrap();
    play(&mut engine, (0, 1)).unwrap();
    play(&mut engine, (1, 1)).unwrap();
    assert_eq!(engine.status(), GameStatus::InProgress);

    assert_eq!(
        play(&mut engine, (0, 2)),
        Ok(Event::Won {
            player: Player::Cross,
            pos: Pos::new(0, 2)
        })
    );
    assert_eq!(engine.status(), GameStatus::Won(Player::Cross));
    assert_eq!(engine.status().winner(), Some(Player::Cross));
    assert_eq!(engine.board().active_player(), Player::Cross);
}

#[test]
fn test_commands_rejected_after_game_over() {
    let mut engine = engine(2, 1);
    assert!(matches!(
        engine.apply(Command::Confirm),
        Ok(Event::Won { .. })
    ));
    for command in [
        Command::MoveUp,
        Command::Confirm,
        Command::Invalid,
        Command::Quit,
    ] {
        assert_eq!(engine.apply(command), Err(GameError::GameOver));
    }
    assert_eq!(engine.moves(), 1);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = engine(3, 3);
    // X O X
    // X O O
    // O X X
    let order = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
    ];
    for cell in order {
        assert!(matches!(play(&mut engine, cell), Ok(Event::Placed { .. })));
    }
    assert_eq!(
        play(&mut engine, (2, 2)),
        Ok(Event::Draw {
            player: Player::Cross,
            pos: Pos::new(2, 2)
        })
    );
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.status().winner(), None);
    assert!(engine.board().is_full());
    assert_eq!(engine.board().cell_at(Pos::new(2, 0)), Cell::Circle);
}

#[test]
fn test_win_on_last_cell_is_not_a_draw() {
    let mut engine = engine(1, 1);
    assert!(matches!(
        engine.apply(Command::Confirm),
        Ok(Event::Won { .. })
    ));
    assert_eq!(engine.status(), GameStatus::Won(Player::Cross));
}

#[test]
fn test_quit_leaves_game_in_progress() {
    let mut engine = engine(3, 3);
    engine.apply(Command::Confirm).unwrap();
    assert_eq!(engine.apply(Command::Quit), Ok(Event::Quit));
    assert_eq!(engine.status(), GameStatus::InProgress);
}
