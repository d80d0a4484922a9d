//! Game state and core simulation types

use glam::Vec2;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball passed the paddle baseline; waiting for an explicit reset
    GameOver,
}

/// Arena extent for a single tick
///
/// Supplied by the host from the current surface size on every `tick`
/// call. The engine never caches it. Zero dimensions are legal (e.g.
/// mid-resize) and must not panic; the update rule only compares and
/// adds, never divides by these.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in arena coordinates (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }
}

/// The player's paddle, anchored to the bottom edge of the arena
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paddle {
    /// Left edge, driven directly by pointer input. Deliberately
    /// unclamped: the paddle may extend past the arena.
    pub x: f32,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Per-tick displacement; component magnitudes stay exactly `BALL_SPEED`
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::splat(BALL_SPEED),
            radius: BALL_RADIUS,
        }
    }
}

/// Complete game state
///
/// Owned by the engine, mutated only by [`tick`](super::tick::tick),
/// [`set_paddle_x`](GameState::set_paddle_x) and
/// [`reset`](GameState::reset). Everything the host needs for drawing
/// is exposed through read-only accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(crate) paddle: Paddle,
    pub(crate) ball: Ball,
    pub(crate) score: u32,
    pub(crate) phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh game: everything at the origin, ball heading
    /// down-right at full speed, score zero, playing.
    pub fn new() -> Self {
        Self {
            paddle: Paddle::default(),
            ball: Ball::default(),
            score: 0,
            phase: GamePhase::Playing,
        }
    }

    /// Move the paddle's left edge. No validation and no clamping: any
    /// finite value is stored as-is. Redrawing is the caller's job.
    pub fn set_paddle_x(&mut self, x: f32) {
        self.paddle.x = x;
    }

    /// Restore the construction state, unconditionally and idempotently.
    /// Works from any phase; this is the only way out of `GameOver`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle_x(&self) -> f32 {
        self.paddle.x
    }

    /// Paddle rectangle for the given arena extent (bottom-anchored)
    pub fn paddle_rect(&self, arena: Arena) -> Rect {
        Rect {
            min: Vec2::new(self.paddle.x, arena.height - PADDLE_HEIGHT),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new();
        assert_eq!(state.ball().pos, Vec2::ZERO);
        assert_eq!(state.ball().vel, Vec2::splat(BALL_SPEED));
        assert_eq!(state.ball().radius, BALL_RADIUS);
        assert_eq!(state.paddle_x(), 0.0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_set_paddle_x_is_unclamped() {
        let mut state = GameState::new();

        state.set_paddle_x(-350.0);
        assert_eq!(state.paddle_x(), -350.0);

        state.set_paddle_x(10_000.0);
        assert_eq!(state.paddle_x(), 10_000.0);
    }

    #[test]
    fn test_paddle_rect_is_bottom_anchored() {
        let mut state = GameState::new();
        state.set_paddle_x(120.0);

        let rect = state.paddle_rect(Arena::new(400.0, 800.0));
        assert_eq!(rect.min, Vec2::new(120.0, 770.0));
        assert_eq!(rect.size, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT));
        assert_eq!(rect.max(), Vec2::new(320.0, 800.0));
    }

    #[test]
    fn test_reset_from_any_phase() {
        let mut state = GameState::new();
        state.set_paddle_x(42.0);
        state.score = 7;
        state.phase = GamePhase::GameOver;

        state.reset();
        assert_eq!(state, GameState::new());

        // Idempotent
        state.reset();
        assert_eq!(state, GameState::new());
    }
}
