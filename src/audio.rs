//! Audio cues
//!
//! The game fires cues and never waits on them. Each cue is a short pattern of
//! square-wave tones; the Web Audio backend synthesizes them procedurally, so
//! no sound files are needed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Bird flapped
    Jump,
    /// Pipe cleared
    Score,
    /// Run ended
    GameOver,
}

/// One square-wave blip with an exponential fade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Hz
    pub freq: f32,
    /// Seconds
    pub duration: f64,
    /// Peak gain before master volume
    pub volume: f32,
    /// Seconds after the cue fires
    pub delay: f64,
}

const JUMP_TONES: [Tone; 2] = [
    Tone { freq: 400.0, duration: 0.1, volume: 0.2, delay: 0.0 },
    Tone { freq: 500.0, duration: 0.1, volume: 0.15, delay: 0.05 },
];

const SCORE_TONES: [Tone; 2] = [
    Tone { freq: 600.0, duration: 0.1, volume: 0.2, delay: 0.0 },
    Tone { freq: 800.0, duration: 0.15, volume: 0.2, delay: 0.1 },
];

const GAME_OVER_TONES: [Tone; 3] = [
    Tone { freq: 400.0, duration: 0.15, volume: 0.3, delay: 0.0 },
    Tone { freq: 300.0, duration: 0.15, volume: 0.25, delay: 0.15 },
    Tone { freq: 200.0, duration: 0.3, volume: 0.2, delay: 0.3 },
];

impl SoundEffect {
    /// Tone pattern for this cue
    pub fn tones(&self) -> &'static [Tone] {
        match self {
            SoundEffect::Jump => &JUMP_TONES,
            SoundEffect::Score => &SCORE_TONES,
            SoundEffect::GameOver => &GAME_OVER_TONES,
        }
    }

    /// Seconds until the last tone has faded
    pub fn length(&self) -> f64 {
        self.tones()
            .iter()
            .map(|t| t.delay + t.duration)
            .fold(0.0, f64::max)
    }
}

/// Fire-and-forget cue sink
pub trait AudioCues {
    fn play(&mut self, effect: SoundEffect);

    /// Output level in `0.0..=1.0`; zero silences every cue
    fn set_volume(&mut self, _volume: f32) {}
}

/// Discards every cue (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioCues for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Remembers cues in order. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    log: Rc<RefCell<Vec<SoundEffect>>>,
    volume: Rc<Cell<Option<f32>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<SoundEffect> {
        self.log.borrow().clone()
    }

    pub fn count(&self, effect: SoundEffect) -> usize {
        self.log.borrow().iter().filter(|&&e| e == effect).count()
    }

    /// Last volume applied, if any
    pub fn volume(&self) -> Option<f32> {
        self.volume.get()
    }
}

impl AudioCues for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.log.borrow_mut().push(effect);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume.set(Some(volume));
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioCues, SoundEffect, Tone};

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: 1.0,
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(&self, ctx: &AudioContext, freq: f32) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(OscillatorType::Square);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        fn play_tone(&self, ctx: &AudioContext, tone: &Tone) {
            let Some((osc, gain)) = self.create_osc(ctx, tone.freq) else {
                return;
            };
            let t = ctx.current_time() + tone.delay;

            gain.gain().set_value_at_time(tone.volume * self.volume, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + tone.duration)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + tone.duration).ok();
        }
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioCues for AudioManager {
        fn play(&mut self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            for tone in effect.tones() {
                self.play_tone(ctx, tone);
            }
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
        }
    }
}
