//! HUD view model
//!
//! Which panels are visible and what they say, derived purely from game
//! state. The DOM side just applies it.

use crate::sim::{GameState, MatchState};

pub const TITLE: &str = "⚽ Goalkeeper Challenge";
pub const INSTRUCTIONS: &str = "Move your mouse to control the goalkeeper";
pub const TAGLINE: &str = "Save the balls and don't let them score!";
pub const GAME_OVER: &str = "Game Over!";

/// Snapshot of what the HUD should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    /// Instructions and the Start button
    pub show_intro: bool,
    /// Live score and the Restart button
    pub show_scoreboard: bool,
    /// Final score and the Play Again button
    pub show_game_over: bool,
    pub score_text: String,
    pub final_score_text: String,
    /// Hide the pointer over the field while playing
    pub hide_cursor: bool,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        let phase = state.phase;
        Self {
            show_intro: phase == MatchState::NotStarted,
            show_scoreboard: phase == MatchState::InProgress,
            show_game_over: phase == MatchState::Over,
            score_text: format!("Score: {}", state.score),
            final_score_text: format!("Final Score: {}", state.score),
            hide_cursor: phase == MatchState::InProgress,
        }
    }
}
