//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame, no wall-clock reads
//! - Injected RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod span;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{GoalLineResult, check_goal_line, resolve_crossing};
pub use span::Span;
pub use spawn::{roll_ball, spawn_ball};
pub use state::{Ball, GameEvent, GameState, Goalkeeper, MatchState};
pub use tick::tick;
