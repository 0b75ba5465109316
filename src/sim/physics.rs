//! Single-axis integrator for the bird

use super::state::Entity;
use crate::consts::{GRAVITY, JUMP_VELOCITY};

/// Advance one tick (semi-implicit order).
///
/// Position moves by the velocity from the start of the tick, then gravity is
/// added. Nothing is clamped here; bounds are the detector's job.
#[inline]
pub fn integrate(entity: Entity) -> Entity {
    Entity {
        y: entity.y + entity.vel,
        vel: entity.vel + GRAVITY,
    }
}

/// Jump is an absolute velocity set, not an impulse added to the current one
#[inline]
pub fn jump(entity: &mut Entity) {
    entity.vel = JUMP_VELOCITY;
}
