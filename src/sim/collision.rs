//! Collision and scoring detection
//!
//! The detector is a pure function of the bird and the live pipes. It never
//! touches the phase itself; it reports what happened and hands back the
//! pipe list with updated `scored` flags so the caller can commit it.

use super::state::{Entity, Obstacle};
use crate::consts::*;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Above the top of the playfield
    Ceiling,
    /// Touched the ground
    Ground,
    /// Hit the pipe with this id
    Obstacle(u32),
}

/// Axis-aligned rectangle in playfield pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl HitBox {
    /// Shrunk bird box used against pipes
    pub fn inset(entity: &Entity) -> Self {
        Self {
            left: ENTITY_X + HITBOX_INSET_X,
            right: ENTITY_X + ENTITY_SIZE - HITBOX_INSET_X,
            top: entity.y + HITBOX_INSET_Y,
            bottom: entity.y + ENTITY_SIZE - HITBOX_INSET_Y,
        }
    }

    /// Strict overlap with the pipe's full horizontal span
    pub fn overlaps_columns(&self, obstacle: &Obstacle) -> bool {
        self.right > obstacle.x && self.left < obstacle.right()
    }

    /// True when the box sits entirely inside the pipe's gap
    pub fn within_gap(&self, obstacle: &Obstacle) -> bool {
        self.top >= obstacle.gap_y && self.bottom <= obstacle.gap_bottom()
    }
}

/// Result of one detector pass
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub collision: Option<Collision>,
    /// Pipes cleared this tick
    pub score_delta: u32,
    /// Input pipes with `scored` updated
    pub obstacles: Vec<Obstacle>,
}

/// Ceiling or ground contact, using the full bird box
pub fn boundary_collision(entity: &Entity) -> Option<Collision> {
    if entity.top() < 0.0 {
        Some(Collision::Ceiling)
    } else if entity.bottom() > PLAYABLE_HEIGHT {
        Some(Collision::Ground)
    } else {
        None
    }
}

/// Inset box overlaps the pipe columns and is not fully inside the gap
pub fn obstacle_collision(entity: &Entity, obstacle: &Obstacle) -> bool {
    let hitbox = HitBox::inset(entity);
    hitbox.overlaps_columns(obstacle) && !hitbox.within_gap(obstacle)
}

/// Pipe's right edge is strictly left of the bird's x
pub fn has_cleared(obstacle: &Obstacle) -> bool {
    obstacle.right() < ENTITY_X
}

/// Evaluate boundaries, pipe hits and scoring for one tick.
///
/// Pipes are scanned in the order given (ascending id). For each pipe the hit
/// test runs before the scoring test; the first hit stops the scan, so later
/// pipes are neither tested nor scored. Points from earlier pipes stand.
pub fn detect(entity: &Entity, obstacles: &[Obstacle]) -> Detection {
    if let Some(collision) = boundary_collision(entity) {
        return Detection {
            collision: Some(collision),
            score_delta: 0,
            obstacles: obstacles.to_vec(),
        };
    }

    let mut collision = None;
    let mut score_delta = 0;
    let mut updated = Vec::with_capacity(obstacles.len());

    for obstacle in obstacles {
        let mut obstacle = obstacle.clone();
        if collision.is_none() {
            if obstacle_collision(entity, &obstacle) {
                collision = Some(Collision::Obstacle(obstacle.id));
            } else if !obstacle.scored && has_cleared(&obstacle) {
                obstacle.scored = true;
                score_delta += 1;
            }
        }
        updated.push(obstacle);
    }

    Detection {
        collision,
        score_delta,
        obstacles: updated,
    }
}
