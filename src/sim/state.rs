//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`], which is owned by the
//! game loop and handed by reference to each simulation step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spawner::Spawner;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Title screen, before the first run
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended by a collision
    Ended,
}

/// The controlled body. Only the vertical axis moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top edge, pixels from the top of the playfield
    pub y: f32,
    /// Pixels per tick, positive is down
    pub vel: f32,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            y: ENTITY_START_Y,
            vel: 0.0,
        }
    }
}

impl Entity {
    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + ENTITY_SIZE
    }
}

/// A pipe pair with a vertical gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Top of the gap
    pub gap_y: f32,
    /// Set once the bird has cleared it
    pub scored: bool,
}

impl Obstacle {
    pub fn new(id: u32, gap_y: f32) -> Self {
        Self {
            id,
            x: PLAYFIELD_WIDTH,
            gap_y,
            scored: false,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + GAP_HEIGHT
    }
}

/// Decorative cloud, wraps around horizontally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub id: u32,
    pub pos: Vec2,
    /// Render scale
    pub size: f32,
    /// Pixels per tick
    pub speed: f32,
}

impl Cloud {
    /// Clouds drift back in from this far right of the playfield
    pub const WRAP_TO: f32 = PLAYFIELD_WIDTH + 50.0;
    /// Clouds wrap once they pass this x
    pub const WRAP_AT: f32 = -100.0;

    /// The three clouds present on the title screen
    pub fn default_field() -> Vec<Cloud> {
        vec![
            Cloud {
                id: 1,
                pos: Vec2::new(100.0, 50.0),
                size: 0.8,
                speed: 0.5,
            },
            Cloud {
                id: 2,
                pos: Vec2::new(280.0, 120.0),
                size: 0.6,
                speed: 0.3,
            },
            Cloud {
                id: 3,
                pos: Vec2::new(450.0, 80.0),
                size: 1.0,
                speed: 0.4,
            },
        ]
    }
}

/// Complete simulation context for one process
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub entity: Entity,
    /// Live pipes, sorted by id
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub clouds: Vec<Cloud>,
    /// Cosmetic ground scroll
    pub ground_offset: f32,
    /// Ticks simulated in the current session
    pub time_ticks: u64,
    pub spawner: Spawner,
}

impl GameState {
    /// Create a new idle game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Idle,
            entity: Entity::default(),
            obstacles: Vec::new(),
            score: 0,
            clouds: Cloud::default_field(),
            ground_offset: 0.0,
            time_ticks: 0,
            spawner: Spawner::new(seed),
        }
    }

    /// Reset everything a new session starts fresh with.
    /// Clouds and ground keep drifting across sessions.
    pub fn reset_session(&mut self) {
        self.entity = Entity::default();
        self.obstacles.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.spawner.reset_ids();
    }

    /// Spawn one pipe at the right edge
    pub fn spawn_obstacle(&mut self) {
        let obstacle = self.spawner.spawn();
        log::debug!("spawn pipe #{} gap_y={:.1}", obstacle.id, obstacle.gap_y);
        self.obstacles.push(obstacle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.entity.y, 280.0);
        assert_eq!(state.entity.vel, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.clouds.len(), 3);
    }

    #[test]
    fn test_reset_session_restarts_ids() {
        let mut state = GameState::new(7);
        state.spawn_obstacle();
        state.spawn_obstacle();
        state.score = 4;
        state.entity.vel = 3.0;

        state.reset_session();
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.entity, Entity::default());

        state.spawn_obstacle();
        assert_eq!(state.obstacles[0].id, 0);
    }
}
