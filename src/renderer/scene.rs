//! Frame composition
//!
//! Turns the game state into one triangle list, painted back to front:
//! field, goal frame, goalkeeper, then every ball in flight.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::config::GameConfig;
use crate::consts::{GOAL_LINE_WIDTH, GOALKEEPER_HEAD_OFFSET, GOALKEEPER_HEAD_RADIUS};
use crate::sim::{Ball, GameState};

const BALL_SEGMENTS: u32 = 24;
const HEAD_SEGMENTS: u32 = 20;
const PATTERN_LINE_WIDTH: f32 = 1.0;

/// Build the full frame for the current state
pub fn build_scene(state: &GameState, config: &GameConfig) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(256 + state.balls.len() * ball_vertex_count());

    // Field
    vertices.extend(shapes::rect(
        Vec2::ZERO,
        Vec2::new(config.field_width, config.field_height),
        colors::FIELD,
    ));

    // Goal frame
    let goal_mouth = config.goal_mouth();
    vertices.extend(shapes::rect_outline(
        Vec2::new(goal_mouth.left, config.field_height - config.goal_height),
        Vec2::new(goal_mouth.width(), config.goal_height),
        GOAL_LINE_WIDTH,
        colors::GOAL_FRAME,
    ));

    // Goalkeeper body and head
    let keeper = &state.goalkeeper;
    let body_top = config.field_height - config.goalkeeper_height;
    vertices.extend(shapes::rect(
        Vec2::new(keeper.x - keeper.half_width(), body_top),
        Vec2::new(keeper.width, config.goalkeeper_height),
        colors::GOALKEEPER_BODY,
    ));
    vertices.extend(shapes::circle(
        Vec2::new(keeper.x, body_top - GOALKEEPER_HEAD_OFFSET),
        GOALKEEPER_HEAD_RADIUS,
        colors::GOALKEEPER_HEAD,
        HEAD_SEGMENTS,
    ));

    for ball in &state.balls {
        vertices.extend(ball_shape(ball));
    }

    vertices
}

/// White ball with a black rim and a pentagon at half radius
pub fn ball_shape(ball: &Ball) -> Vec<Vertex> {
    let half_line = PATTERN_LINE_WIDTH / 2.0;
    let mut vertices = Vec::with_capacity(ball_vertex_count());
    vertices.extend(shapes::circle(ball.pos, ball.radius, colors::BALL, BALL_SEGMENTS));
    vertices.extend(shapes::ring(
        ball.pos,
        ball.radius - half_line,
        ball.radius + half_line,
        colors::BALL_PATTERN,
        BALL_SEGMENTS,
    ));
    vertices.extend(shapes::polygon_outline(
        ball.pos,
        ball.radius * 0.5,
        5,
        PATTERN_LINE_WIDTH,
        colors::BALL_PATTERN,
    ));
    vertices
}

/// Vertices emitted per ball
pub const fn ball_vertex_count() -> usize {
    (BALL_SEGMENTS * 3 + BALL_SEGMENTS * 6 + 5 * 6) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> (GameState, GameConfig) {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.start(&config);
        (state, config)
    }

    #[test]
    fn test_empty_field_has_no_ball_vertices() {
        let (state, config) = started();
        let verts = build_scene(&state, &config);
        assert!(!verts.iter().any(|v| v.color == colors::BALL_PATTERN));
    }

    #[test]
    fn test_each_ball_adds_fixed_vertices() {
        let (mut state, config) = started();
        let base = build_scene(&state, &config).len();

        for i in 0..3 {
            let id = state.next_ball_id();
            state.balls.push(Ball::new(
                id,
                Vec2::new(100.0 + i as f32 * 100.0, 100.0),
                Vec2::new(0.0, 3.0),
                15.0,
            ));
        }
        let verts = build_scene(&state, &config);
        assert_eq!(verts.len(), base + 3 * ball_vertex_count());
    }

    #[test]
    fn test_ball_shape_count_matches() {
        let ball = Ball::new(0, Vec2::new(50.0, 50.0), Vec2::ZERO, 15.0);
        assert_eq!(ball_shape(&ball).len(), ball_vertex_count());
    }

    #[test]
    fn test_background_painted_first() {
        let (state, config) = started();
        let verts = build_scene(&state, &config);
        assert!(verts[..6].iter().all(|v| v.color == colors::FIELD));
    }

    #[test]
    fn test_goalkeeper_follows_position() {
        let (mut state, config) = started();
        state.move_goalkeeper(100.0, &config);
        let verts = build_scene(&state, &config);
        let body: Vec<_> = verts
            .iter()
            .filter(|v| v.color == colors::GOALKEEPER_BODY)
            .collect();
        assert_eq!(body.len(), 6);
        let min_x = body.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = body.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        let min_y = body.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
        assert_eq!(min_x, 70.0);
        assert_eq!(max_x, 130.0);
        assert_eq!(min_y, 320.0);
    }
}
