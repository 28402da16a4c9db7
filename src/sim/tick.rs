//! Per-frame simulation step
//!
//! Advances every ball by one display frame and resolves goal-line crossings.

use super::collision::{GoalLineResult, check_goal_line};
use super::state::{GameEvent, GameState};
use crate::config::GameConfig;

/// Advance the game state by one frame.
///
/// Each ball moves by its current velocity, then gravity is added to its
/// vertical velocity for the next frame. Balls reaching the goal line are
/// removed and reported. A conceded goal ends the match once every ball in
/// this frame has been resolved.
pub fn tick(state: &mut GameState, config: &GameConfig) -> Vec<GameEvent> {
    if !state.is_in_progress() {
        return Vec::new();
    }

    let keeper = state.goalkeeper.span();
    let goal_mouth = config.goal_mouth();
    let mut events = Vec::new();
    let mut conceded = false;

    let balls = std::mem::take(&mut state.balls);
    let mut survivors = Vec::with_capacity(balls.len());

    for mut ball in balls {
        let next = ball.pos + ball.vel;
        let next_vy = ball.vel.y + config.gravity;

        match check_goal_line(
            next.x,
            next.y,
            ball.radius,
            config.field_height,
            keeper,
            goal_mouth,
        ) {
            GoalLineResult::InFlight => {
                ball.pos = next;
                ball.vel.y = next_vy;
                survivors.push(ball);
            }
            GoalLineResult::Saved => {
                state.score += 1;
                log::debug!("Ball {} saved at x={:.1}, score {}", ball.id, next.x, state.score);
                events.push(GameEvent::Saved { ball_id: ball.id });
            }
            GoalLineResult::Goal => {
                log::debug!("Ball {} conceded at x={:.1}", ball.id, next.x);
                conceded = true;
                events.push(GameEvent::GoalConceded { ball_id: ball.id });
            }
            GoalLineResult::Wide => {
                events.push(GameEvent::Wide { ball_id: ball.id });
            }
        }
    }

    state.balls = survivors;

    if conceded {
        log::info!("Goal conceded - match over with score {}", state.score);
        state.concede();
    }

    events
}
