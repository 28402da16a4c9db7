//! Game state and core simulation types
//!
//! Everything the frame loop, spawner and pointer handler touch lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::span::Span;
use crate::config::GameConfig;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchState {
    /// Pre-game screen
    #[default]
    NotStarted,
    /// Active gameplay
    InProgress,
    /// A goal was conceded; terminal until the next start
    Over,
}

/// Outcome of a ball reaching the goal line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Caught by the goalkeeper
    Saved { ball_id: u32 },
    /// Entered the goal mouth past the goalkeeper
    GoalConceded { ball_id: u32 },
    /// Crossed the goal line outside the goal mouth
    Wide { ball_id: u32 },
}

impl GameEvent {
    pub fn ball_id(&self) -> u32 {
        match *self {
            GameEvent::Saved { ball_id }
            | GameEvent::GoalConceded { ball_id }
            | GameEvent::Wide { ball_id } => ball_id,
        }
    }
}

/// A ball in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
        }
    }

    /// Lowest point of the ball (y grows downward)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's goalkeeper
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goalkeeper {
    /// Center x
    pub x: f32,
    pub width: f32,
}

impl Goalkeeper {
    pub fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Horizontal interval covered by the goalkeeper
    pub fn span(&self) -> Span {
        Span::centered(self.x, self.width)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub phase: MatchState,
    pub goalkeeper: Goalkeeper,
    /// Balls in flight, in spawn order
    pub balls: Vec<Ball>,
    /// Next ball ID
    next_id: u32,
}

impl GameState {
    /// Fresh pre-game state
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            phase: MatchState::NotStarted,
            goalkeeper: Goalkeeper::new(config.field_center_x(), config.goalkeeper_width),
            balls: Vec::new(),
            next_id: 0,
        }
    }

    /// Allocate a new ball ID
    pub fn next_ball_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// ID the next spawned ball will receive
    pub fn peek_next_id(&self) -> u32 {
        self.next_id
    }

    #[inline]
    pub fn is_in_progress(&self) -> bool {
        self.phase == MatchState::InProgress
    }

    /// Begin (or restart) a match
    pub fn start(&mut self, config: &GameConfig) {
        self.reinitialize(config);
        self.phase = MatchState::InProgress;
    }

    /// Return to the pre-game screen
    pub fn reset(&mut self, config: &GameConfig) {
        self.reinitialize(config);
        self.phase = MatchState::NotStarted;
    }

    fn reinitialize(&mut self, config: &GameConfig) {
        self.score = 0;
        self.balls.clear();
        self.goalkeeper = Goalkeeper::new(config.field_center_x(), config.goalkeeper_width);
        self.next_id = 0;
    }

    /// Move the goalkeeper to a pointer x relative to the field origin.
    /// Ignored outside of an active match.
    pub fn move_goalkeeper(&mut self, pointer_x: f32, config: &GameConfig) {
        if !self.is_in_progress() {
            return;
        }
        self.goalkeeper.x = config.goalkeeper_travel().clamp(pointer_x);
    }

    /// Enter the terminal phase. No ball outlives the match.
    pub fn concede(&mut self) {
        self.phase = MatchState::Over;
        self.balls.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(state: &mut GameState, x: f32, y: f32) {
        let id = state.next_ball_id();
        state
            .balls
            .push(Ball::new(id, Vec2::new(x, y), Vec2::new(0.0, 3.0), 15.0));
    }

    #[test]
    fn test_new_state_is_pre_game() {
        let config = GameConfig::default();
        let state = GameState::new(&config);
        assert_eq!(state.phase, MatchState::NotStarted);
        assert_eq!(state.score, 0);
        assert!(state.balls.is_empty());
        assert_eq!(state.goalkeeper.x, 250.0);
        assert_eq!(state.peek_next_id(), 0);
    }

    #[test]
    fn test_start_reinitializes() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.start(&config);
        state.score = 7;
        state.goalkeeper.x = 100.0;
        ball_at(&mut state, 100.0, 100.0);
        ball_at(&mut state, 200.0, 100.0);

        state.start(&config);
        assert_eq!(state.phase, MatchState::InProgress);
        assert_eq!(state.score, 0);
        assert!(state.balls.is_empty());
        assert_eq!(state.goalkeeper.x, 250.0);
        assert_eq!(state.peek_next_id(), 0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.start(&config);
        state.score = 3;
        ball_at(&mut state, 300.0, 50.0);

        state.reset(&config);
        let once = state.clone();
        state.reset(&config);

        assert_eq!(state.phase, MatchState::NotStarted);
        assert_eq!(state.phase, once.phase);
        assert_eq!(state.score, once.score);
        assert_eq!(state.balls, once.balls);
        assert_eq!(state.goalkeeper, once.goalkeeper);
        assert_eq!(state.peek_next_id(), once.peek_next_id());
    }

    #[test]
    fn test_start_after_over_recovers() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.start(&config);
        ball_at(&mut state, 250.0, 100.0);
        state.concede();
        assert_eq!(state.phase, MatchState::Over);
        assert!(state.balls.is_empty());

        state.start(&config);
        assert_eq!(state.phase, MatchState::InProgress);
    }

    #[test]
    fn test_move_goalkeeper_ignored_unless_in_progress() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.move_goalkeeper(100.0, &config);
        assert_eq!(state.goalkeeper.x, 250.0);

        state.start(&config);
        state.concede();
        state.move_goalkeeper(100.0, &config);
        assert_eq!(state.goalkeeper.x, 250.0);
    }

    #[test]
    fn test_move_goalkeeper_clamps_to_field() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.start(&config);

        state.move_goalkeeper(-5000.0, &config);
        assert_eq!(state.goalkeeper.x, 30.0);

        state.move_goalkeeper(5000.0, &config);
        assert_eq!(state.goalkeeper.x, 470.0);

        state.move_goalkeeper(321.5, &config);
        assert_eq!(state.goalkeeper.x, 321.5);
    }

    #[test]
    fn test_event_ball_id() {
        assert_eq!(GameEvent::Saved { ball_id: 3 }.ball_id(), 3);
        assert_eq!(GameEvent::GoalConceded { ball_id: 4 }.ball_id(), 4);
        assert_eq!(GameEvent::Wide { ball_id: 5 }.ball_id(), 5);
    }

    #[test]
    fn test_ball_ids_are_monotonic() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let ids: Vec<u32> = (0..5).map(|_| state.next_ball_id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    proptest! {
        #[test]
        fn prop_goalkeeper_always_within_travel(x in -1.0e6f32..1.0e6f32) {
            let config = GameConfig::default();
            let mut state = GameState::new(&config);
            state.start(&config);
            state.move_goalkeeper(x, &config);
            let half = config.goalkeeper_half_width();
            prop_assert!(state.goalkeeper.x >= half);
            prop_assert!(state.goalkeeper.x <= config.field_width - half);
        }
    }
}
