//! Battle state: the invader formation, the defender and its bullets.
//!
//! Deciding what was hit is left to the caller; this module owns the board
//! and tells the map observers whenever it changes.

use glam::Vec2;
use hecs::{Entity, World};

use crate::canvas::ScreenSettings;
use crate::components::*;
use crate::observers::{MapEvent, MapObservers};
use crate::params::Params;
use crate::resources::{Score, ShotBudget};
use crate::settings::GameSettings;

pub struct BattleHelper {
    world: World,
    screen: ScreenSettings<GameSettings>,
    map_observers: MapObservers,
    score: Score,
    shots: ShotBudget,
}

impl BattleHelper {
    /// Create an empty board; call [`BattleHelper::reset_game`] to populate it
    pub fn new(screen_settings: &ScreenSettings<GameSettings>, map_observers: MapObservers) -> Self {
        let nan_fields = screen_settings.custom.nan_fields();
        if !nan_fields.is_empty() {
            log::warn!("Settings without a numeric value: {}", nan_fields.join(", "));
        }

        Self {
            world: World::new(),
            screen: screen_settings.clone(),
            map_observers,
            score: Score::new(),
            shots: ShotBudget::new(screen_settings.custom.shot_budget()),
        }
    }

    /// Clear the board and spawn a fresh formation and defender
    pub fn reset_game(&mut self) {
        self.world.clear();
        self.score.reset();
        self.shots.refill();

        let settings = &self.screen.custom;
        let size = settings.ship_size as f32;
        let offset = settings.ship_offset as f32;
        let pitch = size + offset;

        let rows = settings.formation_rows();
        let columns = settings.formation_columns();
        for row in 0..rows {
            for column in 0..columns {
                let pos = Vec2::new(offset + column as f32 * pitch, offset + row as f32 * pitch);
                self.world.spawn((Invader::new(row, column), Position(pos)));
            }
        }

        let defender_pos = Vec2::new(
            (self.screen.width - Params::DEFENDER_WIDTH) / 2.0,
            self.screen.height - Params::DEFENDER_HEIGHT,
        );
        self.world.spawn((Defender, Position(defender_pos)));

        let ships = rows * columns;
        log::info!("Battle reset: {} ships ({}x{})", ships, rows, columns);
        self.map_observers.notify(&MapEvent::Reset { ships });
    }

    /// Start a new frame: refill the defender's shots
    pub fn begin_frame(&mut self) {
        self.shots.refill();
    }

    /// Fire from the defender if this frame still has shots left
    pub fn fire_defender(&mut self) -> Option<Entity> {
        let defender_pos = self.defender_position()?;
        if !self.shots.try_spend() {
            return None;
        }

        let length = self.screen.custom.defender_bullet_length as f32;
        let pos = Vec2::new(
            defender_pos.x + (Params::DEFENDER_WIDTH - Params::BULLET_WIDTH) / 2.0,
            defender_pos.y - length,
        );
        let bullet = self.world.spawn((DefenderBullet { length }, Position(pos)));

        self.map_observers.notify(&MapEvent::DefenderFired {
            shots_left: self.shots.left,
        });
        Some(bullet)
    }

    /// Remove the invader at (row, column). Returns false if it is not on the board.
    pub fn destroy_ship(&mut self, row: usize, column: usize) -> bool {
        let target = self
            .world
            .query::<&Invader>()
            .iter()
            .find(|(_, invader)| invader.row == row && invader.column == column)
            .map(|(entity, _)| entity);

        let Some(entity) = target else {
            return false;
        };
        if self.world.despawn(entity).is_err() {
            return false;
        }

        self.score.increment();
        let remaining = self.remaining_ships();
        log::debug!("Ship ({}, {}) destroyed, {} left", row, column, remaining);
        self.map_observers.notify(&MapEvent::ShipDestroyed {
            row,
            column,
            remaining,
        });
        if remaining == 0 {
            log::info!("Formation cleared");
            self.map_observers.notify(&MapEvent::Cleared);
        }
        true
    }

    pub fn remaining_ships(&self) -> usize {
        self.world.query::<&Invader>().iter().count()
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining_ships() == 0
    }

    /// Invaders and their positions, row by row
    pub fn invader_positions(&self) -> Vec<(Invader, Vec2)> {
        let mut invaders: Vec<_> = self
            .world
            .query::<(&Invader, &Position)>()
            .iter()
            .map(|(_, (invader, pos))| (*invader, pos.0))
            .collect();
        invaders.sort_by_key(|(invader, _)| (invader.row, invader.column));
        invaders
    }

    pub fn defender_position(&self) -> Option<Vec2> {
        let mut query = self.world.query::<(&Defender, &Position)>();
        let pos = query.iter().next().map(|(_, (_, pos))| pos.0);
        pos
    }

    /// Bullets in flight as (position, length)
    pub fn defender_bullets(&self) -> Vec<(Vec2, f32)> {
        self.world
            .query::<(&DefenderBullet, &Position)>()
            .iter()
            .map(|(_, (bullet, pos))| (pos.0, bullet.length))
            .collect()
    }

    pub fn shots_left(&self) -> u32 {
        self.shots.left
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn settings(&self) -> &GameSettings {
        &self.screen.custom
    }
}
