//! Goalkeeper Challenge - A single-screen goalkeeper arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball flight, goal line, match state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Frame/interval scheduling abstraction
//! - `session`: Game loop wiring (lifecycle, timers, drawing)
//! - `config`: Data-driven game tuning
//! - `ui`: HUD view model

pub mod config;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use session::GameSession;

/// Game configuration constants
pub mod consts {
    /// Field dimensions (logical units, origin top-left, y down)
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Goalkeeper body
    pub const GOALKEEPER_WIDTH: f32 = 60.0;
    pub const GOALKEEPER_HEIGHT: f32 = 80.0;
    pub const GOALKEEPER_HEAD_RADIUS: f32 = 15.0;
    /// Gap between the top of the body and the head center
    pub const GOALKEEPER_HEAD_OFFSET: f32 = 10.0;

    /// Goal mouth (fixed, centered on the field)
    pub const GOAL_MOUTH_LEFT: f32 = 150.0;
    pub const GOAL_MOUTH_RIGHT: f32 = 350.0;
    pub const GOAL_HEIGHT: f32 = 150.0;
    pub const GOAL_LINE_WIDTH: f32 = 4.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Downward acceleration, units/frame²
    pub const GRAVITY: f32 = 0.3;

    /// Spawner
    pub const SPAWN_INTERVAL_MS: u32 = 1500;
    pub const SPAWN_Y: f32 = 20.0;
    /// Horizontal inset from either side for spawn x
    pub const SPAWN_INSET: f32 = 50.0;
    pub const SPAWN_VX_MIN: f32 = -1.0;
    pub const SPAWN_VX_MAX: f32 = 1.0;
    pub const SPAWN_VY_MIN: f32 = 3.0;
    pub const SPAWN_VY_MAX: f32 = 5.0;
}
