//! Frame driver and spawn timer, started and stopped as one unit
//!
//! Each session gets a fresh generation number. Host callbacks (animation
//! frames) carry the generation they were scheduled under; anything from an
//! older session is rejected before it can touch state.

use crate::consts::SPAWN_INTERVAL_MS;

#[derive(Debug, Clone, Copy)]
struct FrameDriver {
    generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct SpawnTimer {
    interval_ms: f64,
    next_due_ms: f64,
}

/// Owns the per-frame driver and the wall-clock spawn timer
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    generation: u64,
    driver: Option<FrameDriver>,
    spawn: Option<SpawnTimer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm both timers for a new session. The spawn timer is due immediately.
    pub fn start(&mut self, now_ms: f64) -> u64 {
        self.generation += 1;
        self.driver = Some(FrameDriver {
            generation: self.generation,
        });
        self.spawn = Some(SpawnTimer {
            interval_ms: SPAWN_INTERVAL_MS,
            next_due_ms: now_ms,
        });
        self.generation
    }

    /// Cancel both timers
    pub fn stop(&mut self) {
        self.driver = None;
        self.spawn = None;
    }

    /// Generation of the most recent session
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True only for callbacks of the live session
    pub fn accepts(&self, generation: u64) -> bool {
        self.driver.is_some_and(|d| d.generation == generation)
    }

    /// Poll the spawn timer. Fires at most once per call; a host that stalled
    /// for more than an interval gets one spawn and a fresh interval.
    pub fn spawn_due(&mut self, now_ms: f64) -> bool {
        let Some(timer) = self.spawn.as_mut() else {
            return false;
        };
        if now_ms < timer.next_due_ms {
            return false;
        }
        timer.next_due_ms += timer.interval_ms;
        if timer.next_due_ms <= now_ms {
            timer.next_due_ms = now_ms + timer.interval_ms;
        }
        true
    }
}
