#![cfg(feature = "std")]

//! Game loop: draw, read a command, apply it, repeat until the game ends.

use crate::{
    game::{Event, GameEngine, GameStatus},
    input::InputSource,
    render::Renderer,
};

/// One local game between two players sharing an input source.
pub struct Session<R: Renderer, I: InputSource> {
    engine: GameEngine,
    renderer: R,
    input: I,
}

impl<R: Renderer, I: InputSource> Session<R, I> {
    pub fn new(engine: GameEngine, renderer: R, input: I) -> Self {
        Self {
            engine,
            renderer,
            input,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_parts(self) -> (GameEngine, R, I) {
        (self.engine, self.renderer, self.input)
    }

    /// Play until somebody wins, the board fills up or a player quits.
    /// Returns [`GameStatus::InProgress`] when the game was abandoned.
    pub fn run(&mut self) -> anyhow::Result<GameStatus> {
        log::info!(
            "starting {0}x{0} game, {1} in a row wins",
            self.engine.board().size(),
            self.engine.board().win_run_length()
        );
        loop {
            self.renderer.draw(self.engine.board())?;
            let command = self.input.next_command()?;
            match self.engine.apply(command) {
                Ok(Event::Quit) => {
                    log::info!("game abandoned after {} moves", self.engine.moves());
                    return Ok(self.engine.status());
                }
                Ok(Event::Won { .. }) | Ok(Event::Draw { .. }) => break,
                Ok(_) => {}
                Err(err) => {
                    log::debug!("{:?} rejected: {}", command, err);
                    self.renderer.notice(&err.to_string())?;
                    self.input.acknowledge()?;
                }
            }
        }

        let status = self.engine.status();
        self.renderer.draw(self.engine.board())?;
        self.renderer.announce(status)?;
        self.input.acknowledge()?;
        Ok(status)
    }
}
