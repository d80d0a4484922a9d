//! Canvas 2D scene painting
//!
//! Strictly the read side of the engine: every draw call works off the
//! state accessors and nothing here mutates the simulation. The host
//! repaints after each tick and after each paddle move.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::settings::Settings;
use crate::sim::{Arena, GamePhase, GameState};

/// Color scheme for the scene
struct Palette {
    background: &'static str,
    paddle_near: &'static str,
    paddle_far: &'static str,
    ball: &'static str,
    text: &'static str,
}

/// Original arcade palette: dark slate arena, teal paddle, yellow ball
const DEFAULT_PALETTE: Palette = Palette {
    background: "rgb(55,71,79)",
    paddle_near: "rgb(0,204,204)",
    paddle_far: "rgb(0,102,102)",
    ball: "rgb(255,255,102)",
    text: "rgb(255,255,255)",
};

const HIGH_CONTRAST_PALETTE: Palette = Palette {
    background: "rgb(0,0,0)",
    paddle_near: "rgb(0,255,255)",
    paddle_far: "rgb(0,255,255)",
    ball: "rgb(255,255,255)",
    text: "rgb(255,255,255)",
};

/// Alpha for the in-game score line (faint, behind the action)
const SCORE_ALPHA: f64 = 50.0 / 255.0;
/// Alpha for the game-over panel text
const GAME_OVER_ALPHA: f64 = 191.0 / 255.0;

/// Scene painter bound to one canvas
pub struct Scene {
    ctx: CanvasRenderingContext2d,
}

impl Scene {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Paint one full frame
    pub fn draw(&self, state: &GameState, arena: Arena, settings: &Settings, fps: u32) {
        let palette = if settings.high_contrast {
            &HIGH_CONTRAST_PALETTE
        } else {
            &DEFAULT_PALETTE
        };

        self.draw_background(arena, palette);
        self.draw_paddle(state, arena, palette);
        self.draw_ball(state, settings, palette);
        self.draw_score(state, palette);

        if state.phase() == GamePhase::GameOver {
            self.draw_game_over(arena, palette);
        }
        if settings.show_fps {
            self.draw_fps(fps, arena, palette);
        }
    }

    fn draw_background(&self, arena: Arena, palette: &Palette) {
        self.ctx.set_fill_style_str(palette.background);
        self.ctx
            .fill_rect(0.0, 0.0, arena.width as f64, arena.height as f64);
    }

    fn draw_paddle(&self, state: &GameState, arena: Arena, palette: &Palette) {
        let rect = state.paddle_rect(arena);
        let (min, max) = (rect.min, rect.max());

        // Diagonal gradient across the paddle rect
        let gradient = self.ctx.create_linear_gradient(
            min.x as f64,
            min.y as f64,
            max.x as f64,
            max.y as f64,
        );
        let _ = gradient.add_color_stop(0.0, palette.paddle_near);
        let _ = gradient.add_color_stop(1.0, palette.paddle_far);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(
            min.x as f64,
            min.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn draw_ball(&self, state: &GameState, settings: &Settings, palette: &Palette) {
        let ball = state.ball();

        if settings.ball_shadow {
            self.ctx.set_shadow_blur(10.0);
            self.ctx.set_shadow_color("rgb(0,0,0)");
        }

        self.ctx.set_fill_style_str(palette.ball);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            ball.pos.x as f64,
            ball.pos.y as f64,
            ball.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();

        // Shadow is context state; clear it so text stays crisp
        self.ctx.set_shadow_blur(0.0);
    }

    fn draw_score(&self, state: &GameState, palette: &Palette) {
        self.ctx.set_global_alpha(SCORE_ALPHA);
        self.ctx.set_fill_style_str(palette.text);
        self.ctx.set_font("bold 60px sans-serif");
        self.ctx.set_text_align("center");
        let _ = self
            .ctx
            .fill_text(&format!("Score: {}", state.score()), 150.0, 100.0);
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_game_over(&self, arena: Arena, palette: &Palette) {
        let (w, h) = (arena.width as f64, arena.height as f64);

        // Rounded panel over the middle third of the arena
        self.rounded_rect_path(w / 4.0, h / 3.0, w / 2.0, h / 3.0, 20.0);
        self.ctx.set_fill_style_str(palette.background);
        self.ctx.fill();

        self.ctx.set_global_alpha(GAME_OVER_ALPHA);
        self.ctx.set_fill_style_str(palette.text);
        self.ctx.set_font("bold 60px sans-serif");
        self.ctx.set_text_align("center");
        let _ = self
            .ctx
            .fill_text("Game Over. Try Again?", w / 2.0, h / 2.0);
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_fps(&self, fps: u32, arena: Arena, palette: &Palette) {
        self.ctx.set_global_alpha(0.8);
        self.ctx.set_fill_style_str(palette.text);
        self.ctx.set_font("14px monospace");
        self.ctx.set_text_align("right");
        let _ = self
            .ctx
            .fill_text(&format!("{fps} fps"), arena.width as f64 - 10.0, 20.0);
        self.ctx.set_global_alpha(1.0);
    }

    /// Trace a rounded-rect path (clockwise from the top-left corner)
    fn rounded_rect_path(&self, x: f64, y: f64, w: f64, h: f64, r: f64) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
        let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
        let _ = ctx.arc_to(x, y + h, x, y, r);
        let _ = ctx.arc_to(x, y, x + w, y, r);
        ctx.close_path();
    }
}
