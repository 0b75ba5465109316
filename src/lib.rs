//! Flappy Loop - core loop of a side-scrolling gap runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `game`: Phase state machine, frame scheduler and session lifecycle
//! - `platform`: Input normalization, key-value storage, browser host
//! - `renderer`: Snapshot to triangle-list geometry for external presenters
//! - `audio`: Audio cue patterns and the Web Audio backend
//! - `highscores`: Persisted best score

pub mod audio;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use audio::{AudioCues, NullAudio, SoundEffect};
pub use game::Game;
pub use highscores::BestScore;
pub use settings::Settings;
pub use snapshot::RenderSnapshot;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 96.0;
    /// Height the bird can occupy before touching the ground
    pub const PLAYABLE_HEIGHT: f32 = PLAYFIELD_HEIGHT - GROUND_HEIGHT;

    /// Bird box (square) and its fixed horizontal position
    pub const ENTITY_SIZE: f32 = 40.0;
    pub const ENTITY_X: f32 = 80.0;
    /// Bird starts vertically centered
    pub const ENTITY_START_Y: f32 = PLAYFIELD_HEIGHT / 2.0 - ENTITY_SIZE / 2.0;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump (pixels/tick, negative is up)
    pub const JUMP_VELOCITY: f32 = -9.0;

    /// Pipe geometry
    pub const OBSTACLE_WIDTH: f32 = 70.0;
    pub const GAP_HEIGHT: f32 = 160.0;
    pub const GAP_MARGIN_TOP: f32 = 80.0;
    pub const GAP_MARGIN_BOTTOM: f32 = 80.0;
    /// Horizontal scroll speed (pixels/tick)
    pub const OBSTACLE_SPEED: f32 = 3.0;
    /// Wall-clock spawn cadence
    pub const SPAWN_INTERVAL_MS: f64 = 1800.0;

    /// Forgiving hit-box insets
    pub const HITBOX_INSET_X: f32 = 10.0;
    pub const HITBOX_INSET_Y: f32 = 5.0;

    /// Nominal display rate, only used by headless hosts
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
