use std::io;

use abreast::parse_script;
use abreast::prelude::*;

/// Renderer that records what it was asked to show.
#[derive(Default)]
struct Recorder {
    draws: usize,
    notices: Vec<String>,
    announced: Option<GameStatus>,
}

impl Renderer for Recorder {
    fn draw(&mut self, _board: &Board) -> io::Result<()> {
        self.draws += 1;
        Ok(())
    }

    fn notice(&mut self, text: &str) -> io::Result<()> {
        self.notices.push(text.to_string());
        Ok(())
    }

    fn announce(&mut self, status: GameStatus) -> io::Result<()> {
        self.announced = Some(status);
        Ok(())
    }
}

fn session(size: usize, run: usize, script: &str) -> Session<Recorder, ScriptedInput> {
    let engine = GameEngine::new(GameConfig::new(size, run).unwrap());
    Session::new(engine, Recorder::default(), ScriptedInput::new(parse_script(script)))
}

#[test]
fn test_scripted_game_won_by_cross() {
    // X fills the middle row while O plays the top row
    let mut s = session(3, 3, "c u c d l c u c d r r c");
    let status = s.run().unwrap();
    assert_eq!(status, GameStatus::Won(Player::Cross));

    let (engine, renderer, input) = s.into_parts();
    assert_eq!(engine.moves(), 5);
    assert_eq!(renderer.announced, Some(GameStatus::Won(Player::Cross)));
    assert!(renderer.notices.is_empty());
    assert_eq!(input.remaining(), 0);
    // the result has to be dismissed
    assert_eq!(input.acknowledged(), 1);
}

#[test]
fn test_rejected_commands_surface_notices() {
    let mut s = session(3, 3, "c c x q");
    let status = s.run().unwrap();
    assert_eq!(status, GameStatus::InProgress);

    assert_eq!(
        s.renderer().notices,
        vec!["Impossible to make this move", "Press arrows or space"]
    );
    assert_eq!(s.renderer().announced, None);
    assert_eq!(s.input().acknowledged(), 2);
    assert_eq!(s.engine().moves(), 1);
    assert_eq!(s.engine().board().active_player(), Player::Circle);
}

#[test]
fn test_exhausted_script_quits() {
    let mut s = session(3, 3, "r r");
    assert_eq!(s.run().unwrap(), GameStatus::InProgress);
    assert_eq!(s.renderer().draws, 3);
}

/// Commands walking the cursor from `from` to `to` and confirming there.
fn walk_and_confirm(from: (usize, usize), to: (usize, usize), size: usize) -> Vec<Command> {
    let downs = (to.0 + size - from.0) % size;
    let rights = (to.1 + size - from.1) % size;
    let mut commands = vec![Command::MoveDown; downs];
    commands.extend(vec![Command::MoveRight; rights]);
    commands.push(Command::Confirm);
    commands
}

#[test]
fn test_draw_is_announced() {
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
        (2, 2),
    ];
    let mut script = Vec::new();
    let mut cursor = (1, 1);
    for cell in order {
        script.extend(walk_and_confirm(cursor, cell, 3));
        cursor = cell;
    }

    let engine = GameEngine::new(GameConfig::new(3, 3).unwrap());
    let mut s = Session::new(engine, Recorder::default(), ScriptedInput::new(script));
    assert_eq!(s.run().unwrap(), GameStatus::Draw);
    assert_eq!(s.renderer().announced, Some(GameStatus::Draw));
    assert_eq!(s.engine().moves(), 9);
    assert_eq!(s.input().remaining(), 0);
}

#[test]
fn test_terminal_renderer_output() {
    let engine = GameEngine::new(GameConfig::new(3, 3).unwrap());
    let renderer = TerminalRenderer::new(Vec::new(), 3);
    let input = ScriptedInput::new(parse_script("c u c d l c u c d r r c"));
    let mut s = Session::new(engine, renderer, input);
    s.run().unwrap();

    let (_, renderer, _) = s.into_parts();
    let out = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(out.contains("┌───┬───┬───┐"));
    assert!(out.contains("X are walking now"));
    assert!(out.contains("O are walking now"));
    assert!(out.contains("X ARE WIN!"));
}
