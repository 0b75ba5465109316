//! Fixed per-frame simulation tick
//!
//! One call advances the running game by exactly one step: physics, scrolling,
//! then collision and scoring. Phase changes are left to the caller.

use super::collision::{Collision, detect};
use super::field::{advance_clouds, advance_obstacles};
use super::physics::integrate;
use super::state::{GamePhase, GameState};
use crate::consts::OBSTACLE_SPEED;

/// What a tick produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Set when the run must end
    pub collision: Option<Collision>,
    /// Pipes cleared this tick
    pub scored: u32,
}

/// Advance the game state by one tick. Does nothing unless running.
pub fn tick(state: &mut GameState) -> TickReport {
    if state.phase != GamePhase::Running {
        return TickReport::default();
    }

    state.time_ticks += 1;

    state.entity = integrate(state.entity);
    advance_obstacles(&mut state.obstacles);
    advance_clouds(&mut state.clouds);
    state.ground_offset += OBSTACLE_SPEED;

    let detection = detect(&state.entity, &state.obstacles);
    state.obstacles = detection.obstacles;
    state.score += detection.score_delta;

    TickReport {
        collision: detection.collision,
        scored: detection.score_delta,
    }
}
