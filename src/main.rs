//! Flappy Loop entry point
//!
//! On the web the library's `start` export is the entry point and this
//! binary is empty. Natively it runs a headless session with a simple
//! autopilot, which is handy for checking determinism and persistence.
//!
//! Usage: `flappy-loop [seed] [max_seconds]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use flappy_loop::consts::*;
    use flappy_loop::game::{FrameStatus, PressOutcome};
    use flappy_loop::platform::storage::FileStore;
    use flappy_loop::sim::GameState;
    use flappy_loop::{Game, NullAudio};

    const DEFAULT_SEED: u64 = 0x5eed;
    const DEFAULT_MAX_SECONDS: u32 = 120;
    const DATA_DIR: &str = ".flappy-loop";

    /// Aim a little below the middle of the next gap
    const AIM_BIAS: f32 = 20.0;

    /// Press when the entity is falling and has dropped under the aim point
    fn wants_jump(state: &GameState) -> bool {
        let target = state
            .obstacles
            .iter()
            .find(|o| o.right() > ENTITY_X)
            .map(|o| o.gap_y + GAP_HEIGHT / 2.0)
            .unwrap_or(PLAYABLE_HEIGHT / 2.0);
        state.entity.vel >= 0.0 && state.entity.y + ENTITY_SIZE / 2.0 > target + AIM_BIAS
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let mut args = std::env::args().skip(1);
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);
        let max_seconds = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_SECONDS);

        let store = FileStore::new(DATA_DIR);
        let mut game = Game::new(seed, Box::new(store), Box::new(NullAudio));
        log::info!("Seed {}, best score so far {}", seed, game.best_score());

        let mut now = 0.0;
        let PressOutcome::Started { generation } = game.press(now) else {
            log::error!("Game did not start from idle");
            return;
        };

        let max_frames = (max_seconds as f64 * 1000.0 / FRAME_MS) as u64;
        let mut frames = 0;
        while frames < max_frames {
            now += FRAME_MS;
            frames += 1;
            if wants_jump(game.state()) {
                game.press(now);
            }
            if game.frame(generation, now) == FrameStatus::Stop {
                break;
            }
        }

        log::info!(
            "Finished after {} frames ({:?}): score {}, best {}",
            frames,
            game.phase(),
            game.score(),
            game.best_score()
        );
        if let Some(json) = game.snapshot().to_json() {
            log::debug!("Final snapshot: {}", json);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is the exported `start` function
}
