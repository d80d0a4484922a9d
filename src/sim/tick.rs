//! Fixed timestep simulation tick
//!
//! One call advances the game by a single fixed step. The host drives
//! this at the nominal cadence; the engine never self-schedules.

use super::state::{Arena, GamePhase, GameState};
use crate::consts::*;

/// Advance the game state by one fixed timestep
///
/// No-op while the game is over. While playing, the update rule runs in
/// a fixed sequence of independent checks against the post-integration
/// ball position:
///
/// 1. integrate position;
/// 2. paddle band: force the ball upward and score;
/// 3. side walls: negate the horizontal velocity;
/// 4. top wall: negate the vertical velocity;
/// 5. baseline: transition to `GameOver`.
///
/// Two legacy behaviors are load-bearing and kept on purpose:
///
/// - The paddle check is level-triggered, not edge-triggered. A ball
///   that stays inside the band for N consecutive ticks deflects and
///   scores N times.
/// - The wall checks negate rather than set the sign, so a ball parked
///   beyond a wall (the paddle can push it there, and a shrinking
///   arena can strand it) flips direction on every tick.
pub fn tick(state: &mut GameState, arena: Arena) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.ball.pos += state.ball.vel;

    // Paddle deflection: the band spans the paddle horizontally and
    // reaches one ball radius above the paddle top.
    let band_top = arena.height - PADDLE_HEIGHT - BALL_RADIUS;
    if state.ball.pos.x >= state.paddle.x
        && state.ball.pos.x <= state.paddle.x + PADDLE_WIDTH
        && state.ball.pos.y >= band_top
    {
        state.ball.vel.y = -BALL_SPEED;
        state.score += 1;
    }

    if state.ball.pos.x <= 0.0 || state.ball.pos.x >= arena.width {
        state.ball.vel.x = -state.ball.vel.x;
    }

    if state.ball.pos.y <= 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
    }

    if state.ball.pos.y >= arena.height {
        state.phase = GamePhase::GameOver;
    }
}
