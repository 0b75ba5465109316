//! Horizontal scrolling: pipes, clouds and the ground stripe

use super::state::{Cloud, Obstacle};
use crate::consts::{OBSTACLE_SPEED, OBSTACLE_WIDTH};

/// Move every pipe left and drop the ones that are fully off-screen.
/// Survivors keep their relative order.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= OBSTACLE_SPEED;
    }
    obstacles.retain(|o| o.x > -OBSTACLE_WIDTH);
}

/// Drift clouds left. The wrap test looks at the position before this tick's
/// move, so a cloud spends one tick past the wrap line before jumping back.
pub fn advance_clouds(clouds: &mut [Cloud]) {
    for cloud in clouds.iter_mut() {
        if cloud.pos.x < Cloud::WRAP_AT {
            cloud.pos.x = Cloud::WRAP_TO;
        } else {
            cloud.pos.x -= cloud.speed;
        }
    }
}
