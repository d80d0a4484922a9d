//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No rendering or platform dependencies
//! - The arena extent is re-supplied on every tick, never cached, so a
//!   resized surface takes effect on the next tick

pub mod state;
pub mod tick;

pub use state::{Arena, Ball, GamePhase, GameState, Paddle, Rect};
pub use tick::tick;
