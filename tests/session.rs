//! End-to-end sessions through the public game API

use flappy_loop::audio::RecordingAudio;
use flappy_loop::consts::*;
use flappy_loop::game::{FrameStatus, PressOutcome};
use flappy_loop::platform::{KeyValueStore, MemoryStore};
use flappy_loop::sim::{GamePhase, GameState, tick};
use flappy_loop::{BestScore, Game, RenderSnapshot, SoundEffect};

fn new_game(seed: u64, store: &MemoryStore, audio: &RecordingAudio) -> Game {
    Game::new(seed, Box::new(store.clone()), Box::new(audio.clone()))
}

/// Press whenever the bird is falling below the middle of the next gap
fn autopilot(state: &GameState) -> bool {
    let target = state
        .obstacles
        .iter()
        .find(|o| o.right() > ENTITY_X)
        .map(|o| o.gap_y + GAP_HEIGHT / 2.0)
        .unwrap_or(PLAYABLE_HEIGHT / 2.0);
    state.entity.vel >= 0.0 && state.entity.y + ENTITY_SIZE / 2.0 > target + 20.0
}

/// Plays one session to the end. The autopilot flies for `pilot_frames`,
/// after that the bird drops, so every session terminates.
fn play(game: &mut Game, start_ms: f64, pilot_frames: u32) -> (f64, Vec<RenderSnapshot>) {
    let PressOutcome::Started { generation } = game.press(start_ms) else {
        panic!("session should start");
    };
    let mut now = start_ms;
    let mut frames = vec![game.snapshot()];
    for n in 0.. {
        assert!(n < pilot_frames + 1_000, "session never ended");
        now += FRAME_MS;
        if n < pilot_frames && autopilot(game.state()) {
            game.press(now);
        }
        let status = game.frame(generation, now);
        frames.push(game.snapshot());
        if status == FrameStatus::Stop {
            break;
        }
    }
    assert_eq!(game.phase(), GamePhase::Ended);
    (now, frames)
}

#[test]
fn free_fall_ends_on_the_ground() {
    let store = MemoryStore::new();
    let audio = RecordingAudio::new();
    let mut game = new_game(3, &store, &audio);
    let generation = game.generation() + 1;
    assert_eq!(game.press(0.0), PressOutcome::Started { generation });

    let mut now = 0.0;
    let mut frames = 0;
    while game.frame(generation, now + FRAME_MS) == FrameStatus::Continue {
        now += FRAME_MS;
        frames += 1;
        assert!(frames < 100, "free fall never landed");
    }

    assert_eq!(game.phase(), GamePhase::Ended);
    assert_eq!(game.state().time_ticks, 28);
    assert_eq!(game.score(), 0);
    assert_eq!(audio.played(), vec![SoundEffect::GameOver]);
    // Nothing beaten, nothing written
    assert!(store.get(BestScore::STORAGE_KEY).is_none());
}

#[test]
fn first_obstacle_appears_on_start() {
    let store = MemoryStore::new();
    let audio = RecordingAudio::new();
    let mut game = new_game(5, &store, &audio);
    assert!(game.state().obstacles.is_empty());

    game.press(250.0);
    let obstacles = &game.state().obstacles;
    assert_eq!(obstacles.len(), 1);
    assert_eq!(obstacles[0].id, 0);
    assert_eq!(obstacles[0].x, PLAYFIELD_WIDTH);
    assert!((GAP_MARGIN_TOP..=PLAYABLE_HEIGHT - GAP_HEIGHT - GAP_MARGIN_BOTTOM)
        .contains(&obstacles[0].gap_y));
}

#[test]
fn stalled_host_gets_a_single_spawn() {
    let store = MemoryStore::new();
    let audio = RecordingAudio::new();
    let mut game = new_game(5, &store, &audio);
    game.press(0.0);
    let generation = game.generation();

    // Ten seconds without a frame
    game.frame(generation, 10_000.0);
    assert_eq!(game.state().obstacles.len(), 2);
    game.frame(generation, 10_000.0 + FRAME_MS);
    assert_eq!(game.state().obstacles.len(), 2);
}

#[test]
fn same_seed_and_inputs_replay_identically() {
    let run = |seed| {
        let store = MemoryStore::new();
        let audio = RecordingAudio::new();
        let mut game = new_game(seed, &store, &audio);
        let (_, frames) = play(&mut game, 0.0, 3_000);
        (frames, audio.played())
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn best_score_survives_a_new_game() {
    let store = MemoryStore::new();
    let audio = RecordingAudio::new();

    let mut first = new_game(9, &store, &audio);
    play(&mut first, 0.0, 3_000);
    let score = first.score();
    assert_eq!(first.best_score(), score);
    assert_eq!(audio.count(SoundEffect::Score), score as usize);

    let second = new_game(10, &store, &RecordingAudio::new());
    assert_eq!(second.best_score(), score);
}

#[test]
fn stored_best_is_not_lowered() {
    let store = MemoryStore::new();
    store.clone().set(BestScore::STORAGE_KEY, "1000");
    let audio = RecordingAudio::new();
    let mut game = new_game(1, &store, &audio);

    play(&mut game, 0.0, 3_000);
    assert_eq!(game.best_score(), 1000);
    assert_eq!(store.get(BestScore::STORAGE_KEY).as_deref(), Some("1000"));
}

#[test]
fn restart_after_game_over_is_a_fresh_session() {
    let store = MemoryStore::new();
    let audio = RecordingAudio::new();
    let mut game = new_game(7, &store, &audio);

    let (ended_at, _) = play(&mut game, 0.0, 600);
    let old_generation = game.generation();

    let restart_at = ended_at + 500.0;
    assert_eq!(
        game.press(restart_at),
        PressOutcome::Started {
            generation: old_generation + 1
        }
    );
    let start = game.snapshot();
    assert_eq!(start.phase, GamePhase::Running);
    assert_eq!(start.score, 0);
    assert_eq!(start.entity_y, ENTITY_START_Y);
    assert_eq!(start.entity_velocity, 0.0);
    assert_eq!(start.obstacles.len(), 1);
    assert_eq!(start.obstacles[0].id, 0);

    // A frame from the finished session changes nothing
    assert_eq!(game.frame(old_generation, ended_at + 600.0), FrameStatus::Stop);
    assert_eq!(game.snapshot(), start);
}

#[test]
fn obstacle_scrolls_through_and_leaves() {
    let mut state = GameState::new(1);
    state.phase = GamePhase::Running;
    state.spawn_obstacle();
    state.obstacles[0].gap_y = 200.0;

    for n in 1..=157 {
        // Hold the bird inside the gap
        state.entity.y = 250.0;
        state.entity.vel = 0.0;
        let report = tick(&mut state);
        assert_eq!(report.collision, None, "hit on tick {n}");
        if n < 157 {
            assert_eq!(state.obstacles.len(), 1, "removed early on tick {n}");
        }
    }
    assert!(state.obstacles.is_empty());
    assert_eq!(state.score, 1);
}
