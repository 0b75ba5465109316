//! Read-only render snapshot handed to presentation layers once per frame

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Bird tilt limits in degrees
const TILT_MIN_DEG: f32 = -30.0;
const TILT_MAX_DEG: f32 = 90.0;
/// Degrees of tilt per pixel/tick of velocity
const TILT_PER_VELOCITY: f32 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub x: f32,
    pub gap_y: f32,
    pub gap_height: f32,
    pub scored: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Everything a presenter needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub width: f32,
    pub height: f32,
    pub ground_height: f32,
    pub phase: GamePhase,
    pub score: u32,
    pub best_score: u32,
    pub entity_x: f32,
    pub entity_y: f32,
    pub entity_size: f32,
    pub entity_velocity: f32,
    /// Degrees, positive noses down
    pub entity_tilt: f32,
    /// Ascending id
    pub obstacles: Vec<ObstacleView>,
    pub clouds: Vec<CloudView>,
    pub ground_offset: f32,
}

/// Nose-up when rising, nose-down when falling
pub fn tilt_degrees(velocity: f32) -> f32 {
    (velocity * TILT_PER_VELOCITY).clamp(TILT_MIN_DEG, TILT_MAX_DEG)
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, best_score: u32) -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            phase: state.phase,
            score: state.score,
            best_score,
            entity_x: ENTITY_X,
            entity_y: state.entity.y,
            entity_size: ENTITY_SIZE,
            entity_velocity: state.entity.vel,
            entity_tilt: tilt_degrees(state.entity.vel),
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    x: o.x,
                    gap_y: o.gap_y,
                    gap_height: GAP_HEIGHT,
                    scored: o.scored,
                })
                .collect(),
            clouds: state
                .clouds
                .iter()
                .map(|c| CloudView {
                    x: c.pos.x,
                    y: c.pos.y,
                    size: c.size,
                })
                .collect(),
            ground_offset: state.ground_offset,
        }
    }

    /// JSON for script-side presenters
    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;

    #[test]
    fn test_tilt_clamps() {
        assert_eq!(tilt_degrees(0.0), 0.0);
        assert_eq!(tilt_degrees(-9.0), -27.0);
        assert_eq!(tilt_degrees(-20.0), TILT_MIN_DEG);
        assert_eq!(tilt_degrees(50.0), TILT_MAX_DEG);
    }

    #[test]
    fn test_capture_copies_state() {
        let mut state = GameState::new(5);
        state.obstacles.push(Obstacle::new(0, 120.0));
        state.score = 2;

        let snap = RenderSnapshot::capture(&state, 8);
        assert_eq!(snap.phase, GamePhase::Idle);
        assert_eq!(snap.score, 2);
        assert_eq!(snap.best_score, 8);
        assert_eq!(snap.entity_y, ENTITY_START_Y);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].gap_height, GAP_HEIGHT);
        assert_eq!(snap.clouds.len(), 3);
    }

    #[test]
    fn test_json_shape() {
        let snap = RenderSnapshot::capture(&GameState::new(5), 0);
        let json = snap.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "idle");
        assert_eq!(value["width"], 400.0);
        assert!(value["obstacles"].as_array().unwrap().is_empty());
    }
}
