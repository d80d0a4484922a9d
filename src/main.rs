//! Paddle Bounce entry point
//!
//! Handles platform-specific initialization and runs the game loop.
//! The browser host owns the canvas, the fixed-cadence tick driver and
//! input decoding; the simulation itself lives in `paddle_bounce::sim`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use paddle_bounce::consts::*;
    use paddle_bounce::render::Scene;
    use paddle_bounce::settings::Settings;
    use paddle_bounce::sim::{Arena, GameState, tick};

    /// Game instance holding all host-side state
    struct Game {
        state: GameState,
        scene: Scene,
        canvas: HtmlCanvasElement,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, scene: Scene, settings: Settings) -> Self {
            Self {
                state: GameState::new(),
                scene,
                canvas,
                settings,
                accumulator: 0.0,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Current arena extent, re-read from the canvas every frame so
        /// a resize takes effect on the next tick
        fn arena(&self) -> Arena {
            Arena::new(self.canvas.width() as f32, self.canvas.height() as f32)
        }

        /// Keep the backing store in sync with the element's CSS size
        fn resize_to_client(&self) {
            let w = self.canvas.client_width().max(0) as u32;
            let h = self.canvas.client_height().max(0) as u32;
            if self.canvas.width() != w {
                self.canvas.set_width(w);
            }
            if self.canvas.height() != h {
                self.canvas.set_height(h);
            }
        }

        /// Run simulation ticks at the fixed 30 Hz cadence
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let arena = self.arena();
            let mut substeps = 0;
            while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, arena);
                self.accumulator -= TICK_DT;
                substeps += 1;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Repaint from the engine's read-only accessors
        fn render(&self) {
            self.scene
                .draw(&self.state, self.arena(), &self.settings, self.fps);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Paddle Bounce starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        canvas.set_width(canvas.client_width().max(0) as u32);
        canvas.set_height(canvas.client_height().max(0) as u32);

        let scene = Scene::new(&canvas).expect("Failed to get 2d context");
        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(canvas.clone(), scene, settings)));

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Paddle Bounce running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move / down - paddle follows the pointer, centered on it
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.state
                    .set_paddle_x(event.offset_x() as f32 - PADDLE_WIDTH / 2.0);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - restart after a loss
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.is_game_over() {
                    g.state.reset();
                    log::info!("Game reset");
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start / move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let mut g = game.borrow_mut();
                    g.state.set_paddle_x(x - PADDLE_WIDTH / 2.0);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end - restart after a loss
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if g.state.is_game_over() {
                    g.state.reset();
                    log::info!("Game reset");
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
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
                TICK_DT
            };
            g.last_time = time;

            g.resize_to_client();
            g.update(dt, time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paddle_bounce::consts::*;
    use paddle_bounce::sim::{Arena, GameState, tick};

    env_logger::init();
    log::info!("Paddle Bounce (native) starting...");
    log::info!("The playable build targets the browser - serve the wasm bundle instead");

    // Headless smoke rally: keep the paddle under the ball, with a
    // deliberate misalignment every few moves so the run ends.
    let arena = Arena::new(480.0, 800.0);
    let mut state = GameState::new();
    let mut ticks = 0u32;

    while !state.is_game_over() && ticks < 20_000 {
        let centered = state.ball().pos.x - PADDLE_WIDTH / 2.0;
        if ticks % 97 == 0 {
            state.set_paddle_x(centered + 300.0);
        } else {
            state.set_paddle_x(centered);
        }
        tick(&mut state, arena);
        ticks += 1;
    }

    println!(
        "Rally over: score {} after {} ticks ({})",
        state.score(),
        ticks,
        if state.is_game_over() {
            "game over"
        } else {
            "tick cap reached"
        }
    );
}
