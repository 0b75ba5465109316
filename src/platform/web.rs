//! Browser host (wasm32)
//!
//! Wires DOM events into the game and drives frames with
//! `requestAnimationFrame`. The frame loop only runs while a session is
//! running; every scheduled frame carries the session generation so a frame
//! queued by an old session is dropped by `Game::frame`.
//!
//! The presenter callback runs with no borrow of the host held, so it may
//! synchronously trigger other listeners.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, PointerEvent};

use super::input::InputAdapter;
use super::storage::LocalStorage;
use crate::audio::AudioManager;
use crate::game::{FrameStatus, Game, PressOutcome};
use crate::renderer;

struct Host {
    game: Game,
    input: InputAdapter,
    /// Presenter callback: `(snapshotJson, vertices)`, where `vertices` is a
    /// `Float32Array` of interleaved `x, y, r, g, b, a` triangles
    on_frame: js_sys::Function,
}

type Shared = Rc<RefCell<Host>>;

/// Hand the current frame to the presenter
fn publish(host: &Shared) {
    let (snapshot, on_frame) = {
        let h = host.borrow();
        (h.game.snapshot(), h.on_frame.clone())
    };
    let Some(json) = snapshot.to_json() else {
        return;
    };
    let vertices = js_sys::Float32Array::from(renderer::frame_data(&snapshot).as_slice());
    if let Err(e) = on_frame.call2(&JsValue::NULL, &JsValue::from_str(&json), &vertices) {
        log::warn!("Render callback failed: {:?}", e);
    }
}

/// Handle returned to JS by [`start`]
#[wasm_bindgen]
pub struct GameHandle {
    host: Shared,
}

#[wasm_bindgen]
impl GameHandle {
    /// Mute or unmute every cue; the choice is saved for the next visit
    pub fn set_muted(&self, muted: bool) {
        self.host.borrow_mut().game.set_muted(muted);
        log::info!("Audio {}", if muted { "muted" } else { "unmuted" });
    }

    pub fn muted(&self) -> bool {
        self.host.borrow().game.settings().muted
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Start the game inside the element with id `element_id`.
///
/// `on_frame` is called with the snapshot JSON and the frame's triangle
/// vertices after every state change.
#[wasm_bindgen]
pub fn start(element_id: &str, on_frame: js_sys::Function) -> Result<GameHandle, JsValue> {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| format!("no element #{element_id}"))?;

    let audio = AudioManager::new();
    let seed = js_sys::Date::now() as u64;
    let game = Game::new(seed, Box::new(LocalStorage), Box::new(audio));

    let host = Rc::new(RefCell::new(Host {
        game,
        input: InputAdapter::new(),
        on_frame,
    }));

    setup_input_handlers(&window, &element, host.clone())?;
    publish(&host);

    log::info!("Flappy Loop ready (seed {})", seed);
    Ok(GameHandle { host })
}

fn setup_input_handlers(
    window: &web_sys::Window,
    element: &web_sys::Element,
    host: Shared,
) -> Result<(), JsValue> {
    // Keyboard
    {
        let host = host.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let response = host
                .borrow_mut()
                .input
                .key_down(&event.code(), event.repeat());
            if response.prevent_default {
                event.prevent_default();
            }
            if response.action {
                press(&host);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let host = host.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            host.borrow_mut().input.key_up(&event.code());
        });
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Window blur: a held key's keyup may never arrive
    {
        let host = host.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            host.borrow_mut().input.reset();
        });
        window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Pointer (mouse, touch, pen)
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            if host.borrow().input.pointer_down(event.button()) {
                event.prevent_default();
                press(&host);
            }
        });
        element
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn press(host: &Shared) {
    let outcome = host.borrow_mut().game.press(now_ms());
    if let PressOutcome::Started { generation } = outcome {
        request_animation_frame(host.clone(), generation);
        publish(host);
    }
}

fn request_animation_frame(host: Shared, generation: u64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        on_animation_frame(host, generation, time);
    });
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("requestAnimationFrame failed");
    }
    closure.forget();
}

fn on_animation_frame(host: Shared, generation: u64, time: f64) {
    let status = host.borrow_mut().game.frame(generation, time);
    publish(&host);
    if status == FrameStatus::Continue {
        request_animation_frame(host, generation);
    }
}
