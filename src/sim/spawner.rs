//! Pipe spawner: id allocation and randomized gap placement

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::consts::*;

/// Lowest allowed gap start
pub const GAP_MIN_Y: f32 = GAP_MARGIN_TOP;
/// Highest allowed gap start
pub const GAP_MAX_Y: f32 = PLAYABLE_HEIGHT - GAP_HEIGHT - GAP_MARGIN_BOTTOM;

/// Creates pipes with monotonic ids and seeded gap positions
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    next_id: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            next_id: 0,
        }
    }

    /// Numbering restarts from zero every session. The RNG keeps running so
    /// consecutive sessions do not replay the same layout.
    pub fn reset_ids(&mut self) {
        self.next_id = 0;
    }

    /// Pick a gap start uniformly within the allowed band
    pub fn roll_gap(&mut self) -> f32 {
        self.rng.random_range(GAP_MIN_Y..=GAP_MAX_Y)
    }

    pub fn spawn(&mut self) -> Obstacle {
        let id = self.next_id;
        self.next_id += 1;
        let gap_y = self.roll_gap();
        Obstacle::new(id, gap_y)
    }
}
