//! Paddle Bounce - a single-player paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball movement, collisions, score, phase)
//! - `render`: Canvas 2D scene painting (browser only)
//! - `settings`: Player preferences persisted to LocalStorage

pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod render;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Paddle dimensions in arena pixels
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;

    /// Ball radius
    pub const BALL_RADIUS: f32 = 20.0;
    /// Per-tick displacement of each velocity component. Collisions only
    /// flip signs, so component magnitudes never drift from this.
    pub const BALL_SPEED: f32 = 10.0;

    /// Fixed simulation cadence (one tick every 1000/30 ms)
    pub const TICK_HZ: f32 = 30.0;
    /// Fixed timestep in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_HZ;
    /// Maximum substeps per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
}
