//! Ball spawner
//!
//! Randomness comes from the caller so a seeded `Pcg32` (or any other
//! `Rng`) reproduces the same sequence of balls.

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, GameState};
use crate::config::GameConfig;

/// Roll a new ball's start position and velocity
pub fn roll_ball<R: Rng>(id: u32, config: &GameConfig, rng: &mut R) -> Ball {
    let x = rng.random_range(config.spawn_inset..config.field_width - config.spawn_inset);
    let vx = rng.random_range(config.spawn_vx.0..config.spawn_vx.1);
    let vy = rng.random_range(config.spawn_vy.0..config.spawn_vy.1);
    Ball::new(
        id,
        Vec2::new(x, config.spawn_y),
        Vec2::new(vx, vy),
        config.ball_radius,
    )
}

/// Append one ball to the live set. Returns its ID, or `None` when no match
/// is in progress.
pub fn spawn_ball<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
) -> Option<u32> {
    if !state.is_in_progress() {
        return None;
    }
    let id = state.next_ball_id();
    let ball = roll_ball(id, config, rng);
    log::debug!(
        "Spawned ball {} at x={:.1} vel=({:.2}, {:.2})",
        id,
        ball.pos.x,
        ball.vel.x,
        ball.vel.y
    );
    state.balls.push(ball);
    Some(id)
}
