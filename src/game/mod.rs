//! Phase state machine and session lifecycle
//!
//! `Game` is the single entry point hosts talk to: they forward primary
//! actions with [`Game::press`] and drive frames with [`Game::frame`]. All
//! state mutation funnels through these two calls.

pub mod schedule;

pub use schedule::Scheduler;

use crate::audio::{AudioCues, SoundEffect};
use crate::highscores::BestScore;
use crate::platform::storage::KeyValueStore;
use crate::settings::Settings;
use crate::sim::{Collision, GamePhase, GameState, jump, tick};
use crate::snapshot::RenderSnapshot;

/// What a primary action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// A session started; the host should drive frames for this generation
    Started { generation: u64 },
    /// A jump will be applied at the top of the next frame
    JumpQueued,
}

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stop,
}

/// A game instance with its collaborators
pub struct Game {
    state: GameState,
    scheduler: Scheduler,
    best: BestScore,
    settings: Settings,
    store: Box<dyn KeyValueStore>,
    audio: Box<dyn AudioCues>,
    pending_jump: bool,
}

impl Game {
    /// Create an idle game. The best score and settings are read from
    /// `store`, and the settings volume is applied to `audio`.
    pub fn new(seed: u64, store: Box<dyn KeyValueStore>, mut audio: Box<dyn AudioCues>) -> Self {
        let best = BestScore::load(&*store);
        let settings = Settings::load(&*store);
        audio.set_volume(settings.effective_volume());
        log::info!("Game created (seed {}, best {})", seed, best.get());
        Self {
            state: GameState::new(seed),
            scheduler: Scheduler::new(),
            best,
            settings,
            store,
            audio,
            pending_jump: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> u32 {
        self.best.get()
    }

    /// Generation of the current (or last) session
    pub fn generation(&self) -> u64 {
        self.scheduler.generation()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the preferences, apply the volume and persist them
    pub fn set_settings(&mut self, settings: Settings) {
        self.audio.set_volume(settings.effective_volume());
        settings.save(&mut *self.store);
        self.settings = settings;
    }

    pub fn set_muted(&mut self, muted: bool) {
        let settings = Settings {
            muted,
            ..self.settings.clone()
        };
        self.set_settings(settings);
    }

    /// Read-only view of the simulation context
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Primary action. Starts a session when idle or ended; while running it
    /// queues a jump. Repeated presses before the next frame collapse into one.
    pub fn press(&mut self, now_ms: f64) -> PressOutcome {
        match self.state.phase {
            GamePhase::Running => {
                self.pending_jump = true;
                PressOutcome::JumpQueued
            }
            GamePhase::Idle | GamePhase::Ended => {
                let generation = self.start_session(now_ms);
                PressOutcome::Started { generation }
            }
        }
    }

    /// Drive one display frame for `generation`.
    ///
    /// Order: pending input, spawn timer, simulation tick, phase transition.
    /// Frames from a stale generation or outside a running session are ignored.
    pub fn frame(&mut self, generation: u64, now_ms: f64) -> FrameStatus {
        if !self.scheduler.accepts(generation) {
            log::debug!(
                "ignoring frame for generation {} (current {})",
                generation,
                self.scheduler.generation()
            );
            return FrameStatus::Stop;
        }

        if std::mem::take(&mut self.pending_jump) {
            jump(&mut self.state.entity);
            self.audio.play(SoundEffect::Jump);
        }

        if self.scheduler.spawn_due(now_ms) {
            self.state.spawn_obstacle();
        }

        let report = tick(&mut self.state);
        for _ in 0..report.scored {
            self.audio.play(SoundEffect::Score);
        }

        match report.collision {
            Some(collision) => {
                self.end_session(collision);
                FrameStatus::Stop
            }
            None => FrameStatus::Continue,
        }
    }

    /// Immutable frame for presenters
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, self.best.get())
    }

    fn start_session(&mut self, now_ms: f64) -> u64 {
        // Paired with stop() in end_session; never two live timers
        self.scheduler.stop();
        self.state.reset_session();
        self.pending_jump = false;
        self.state.phase = GamePhase::Running;

        let generation = self.scheduler.start(now_ms);
        if self.scheduler.spawn_due(now_ms) {
            self.state.spawn_obstacle();
        }
        log::info!("Session {} started", generation);
        generation
    }

    fn end_session(&mut self, collision: Collision) {
        self.scheduler.stop();
        self.pending_jump = false;
        self.state.phase = GamePhase::Ended;
        self.audio.play(SoundEffect::GameOver);

        let score = self.state.score;
        log::info!(
            "Session {} over after {} ticks: {:?}, score {}",
            self.scheduler.generation(),
            self.state.time_ticks,
            collision,
            score
        );
        if self.best.record(score) {
            log::info!("New best score: {}", score);
            self.best.save(&mut *self.store);
        }
    }
}
