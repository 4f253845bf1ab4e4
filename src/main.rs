//! Lakecast entry point
//!
//! Handles platform-specific initialization and runs the per-frame loop.
//! The browser build wires pointer lock, keyboard/mouse input, and HUD DOM
//! updates around the simulation; rendering is delegated to an external
//! presentation layer that consumes frame snapshots.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, MouseEvent};

    use lakecast::Settings;
    use lakecast::audio::AudioManager;
    use lakecast::sim::{FrameInput, RenderSnapshot, SessionPhase, SessionState, tick};

    // JS bindings: pointer lock plus the snapshot hand-off to the external
    // renderer (window.lakecastRender)
    #[wasm_bindgen(inline_js = "
        export function request_pointer_lock() {
            const el = document.getElementById('game-container') || document.body;
            if (el && el.requestPointerLock) {
                el.requestPointerLock();
            }
        }

        export function pointer_lock_active() {
            return document.pointerLockElement !== null;
        }

        export function submit_frame(json) {
            if (window.lakecastRender) {
                window.lakecastRender(JSON.parse(json));
            }
        }
    ")]
    extern "C" {
        fn request_pointer_lock();
        fn pointer_lock_active() -> bool;
        fn submit_frame(json: &str);
    }

    /// Pitch limit just short of straight up/down
    const PITCH_LIMIT: f32 = 1.55;
    /// Radians of look rotation per pixel of mouse travel
    const LOOK_RATE: f32 = 0.002;

    /// Game instance holding all state
    struct Game {
        state: SessionState,
        input: FrameInput,
        settings: Settings,
        audio: AudioManager,
        last_time: f64,
        last_phase: SessionPhase,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: SessionState::new(seed),
                input: FrameInput::default(),
                settings: Settings::load(),
                audio: AudioManager::new(),
                last_time: 0.0,
                last_phase: SessionPhase::Menu,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Apply a pointer-lock mouse delta to the view rig
        fn apply_look(&mut self, dx: f32, dy: f32) {
            if !self.input.pointer_locked {
                return;
            }
            let rig = &mut self.state.player.rig;
            rig.yaw -= dx * LOOK_RATE * self.settings.mouse_sensitivity;
            rig.pitch = (rig.pitch - dy * LOOK_RATE * self.settings.look_y_factor())
                .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        /// Run one frame of simulation
        fn update(&mut self, dt: f32, time: f64) {
            self.input.pointer_locked = pointer_lock_active();
            tick(&mut self.state, &self.input, dt.min(0.1));

            // Clear one-shot inputs after processing
            self.input.cast = false;
            self.input.start = false;
            self.input.select_lure = None;

            // Route simulation events to the audio layer
            let events = self.state.drain_events();
            self.audio.play_events(&events);

            // Request pointer capture when gameplay begins
            let phase = self.state.phase;
            if phase != self.last_phase {
                if phase == SessionPhase::Playing {
                    request_pointer_lock();
                }
                self.last_phase = phase;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 && time > oldest {
                self.fps = (60000.0 / (time - oldest)).round() as u32;
            }
        }

        /// Hand the frame snapshot to the external renderer
        fn render(&self) {
            let snapshot = RenderSnapshot::capture(&self.state);
            match serde_json::to_string(&snapshot) {
                Ok(json) => submit_frame(&json),
                Err(e) => log::warn!("Snapshot serialization failed: {e}"),
            }
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("score-value") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("fish-caught") {
                el.set_text_content(Some(&self.state.fish_caught.to_string()));
            }
            if let Some(el) = document.get_element_by_id("current-lure") {
                el.set_text_content(Some(self.state.selected_lure.name()));
            }
            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("fps-value") {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }

            // Menu and loading screen visibility follow the phase
            if let Some(el) = document.get_element_by_id("game-menu") {
                let class = if self.state.phase == SessionPhase::Menu {
                    ""
                } else {
                    "hidden"
                };
                let _ = el.set_attribute("class", class);
            }
            if let Some(el) = document.get_element_by_id("loading-screen") {
                let class = if self.state.phase == SessionPhase::Loading {
                    ""
                } else {
                    "hidden"
                };
                let _ = el.set_attribute("class", class);
            }
            if self.state.phase == SessionPhase::Loading {
                if let Some(el) = document.get_element_by_id("progress-bar-fill") {
                    let _ = el.set_attribute(
                        "style",
                        &format!("width: {:.0}%", self.state.loading.progress),
                    );
                }
            }
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keydown: movement flags and lure selection
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "KeyW" | "ArrowUp" => g.input.moves.forward = true,
                    "KeyS" | "ArrowDown" => g.input.moves.backward = true,
                    "KeyA" | "ArrowLeft" => g.input.moves.left = true,
                    "KeyD" | "ArrowRight" => g.input.moves.right = true,
                    "Digit1" => g.input.select_lure = Some(0),
                    "Digit2" => g.input.select_lure = Some(1),
                    "Digit3" => g.input.select_lure = Some(2),
                    "Digit4" => g.input.select_lure = Some(3),
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup: clear movement flags
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "KeyW" | "ArrowUp" => g.input.moves.forward = false,
                    "KeyS" | "ArrowDown" => g.input.moves.backward = false,
                    "KeyA" | "ArrowLeft" => g.input.moves.left = false,
                    "KeyD" | "ArrowRight" => g.input.moves.right = false,
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse look while captured
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut()
                    .apply_look(event.movement_x() as f32, event.movement_y() as f32);
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mousedown: cast
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.cast = true;
            });
            let _ = document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer lock changes: losing capture drops the session to the menu
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                let locked = pointer_lock_active();
                g.input.pointer_locked = locked;
                if !locked {
                    g.state.release();
                    g.input.moves = Default::default();
                }
            });
            let _ = document.add_event_listener_with_callback(
                "pointerlockchange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Mute on blur, restore on focus
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().audio.set_muted(false);
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id("start-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lakecast starting...");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Session created with seed: {seed}");

        setup_input_handlers(game.clone());
        setup_start_button(game.clone());

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lakecast (native) starting...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo session: fast-forward the loading screen, then fish for a
/// simulated minute at 60 Hz, casting toward the water once a second.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use lakecast::sim::{FrameInput, SessionPhase, SessionState, tick};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = SessionState::new(seed);

    let mut input = FrameInput {
        start: true,
        pointer_locked: true,
        ..Default::default()
    };
    tick(&mut state, &input, 1.0 / 60.0);
    input.start = false;

    while state.phase == SessionPhase::Loading {
        tick(&mut state, &input, 1.0 / 60.0);
    }

    // Look slightly downward so casts land on the water
    state.player.rig.pitch = -0.6;

    let dt = 1.0 / 60.0;
    for frame in 0..3600 {
        input.cast = frame % 60 == 0;
        tick(&mut state, &input, dt);
    }

    println!(
        "Demo session over: {} points, {} fish caught, {} left in the lake",
        state.score,
        state.fish_caught,
        state.fish.len()
    );
}
