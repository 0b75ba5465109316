//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (by obstacle ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Collision, Detection, HitBox, detect};
pub use field::{advance_clouds, advance_obstacles};
pub use physics::{integrate, jump};
pub use spawner::{GAP_MAX_Y, GAP_MIN_Y, Spawner};
pub use state::{Cloud, Entity, GamePhase, GameState, Obstacle};
pub use tick::{TickReport, tick};
