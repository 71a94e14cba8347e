//! The single game a page runs, and the operations exposed to script.

use game_core::{setup_game, CanvasError, CanvasHost, InvaderersGame, SetupOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Game not initialized")]
    NotInitialized,
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Default)]
pub struct Session {
    game: Option<InvaderersGame>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set up a game, replacing any running one
    pub fn start<C: CanvasHost>(&mut self, host: &C, container_id: &str) -> Result<(), SessionError> {
        let game = setup_game(
            host,
            SetupOptions {
                container_id: container_id.to_string(),
            },
        )?;
        if self.game.replace(game).is_some() {
            log::info!("Replaced running game with `{}`", container_id);
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.game.is_some()
    }

    fn game(&self) -> Result<&InvaderersGame, SessionError> {
        self.game.as_ref().ok_or(SessionError::NotInitialized)
    }

    fn game_mut(&mut self) -> Result<&mut InvaderersGame, SessionError> {
        self.game.as_mut().ok_or(SessionError::NotInitialized)
    }

    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.game_mut()?.reset();
        Ok(())
    }

    /// Settings as JSON with camelCase keys; NaN values come out as `null`
    pub fn settings_json(&self) -> Result<String, SessionError> {
        let settings = &self.game()?.screen_settings().custom;
        Ok(serde_json::to_string(settings)?)
    }

    pub fn remaining_ships(&self) -> Result<usize, SessionError> {
        Ok(self.game()?.helpers().battle_helper.remaining_ships())
    }

    pub fn begin_frame(&mut self) -> Result<(), SessionError> {
        self.game_mut()?.helpers_mut().battle_helper.begin_frame();
        Ok(())
    }

    pub fn fire_defender(&mut self) -> Result<bool, SessionError> {
        let battle = &mut self.game_mut()?.helpers_mut().battle_helper;
        Ok(battle.fire_defender().is_some())
    }

    pub fn destroy_ship(&mut self, row: usize, column: usize) -> Result<bool, SessionError> {
        let battle = &mut self.game_mut()?.helpers_mut().battle_helper;
        Ok(battle.destroy_ship(row, column))
    }
}
