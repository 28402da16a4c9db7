//! Goal-line resolution
//!
//! A ball that reaches the bottom of the field is either saved, conceded or
//! wide. The goalkeeper is checked first, so any overlap with the goal mouth
//! resolves as a save.

use super::span::Span;

/// Where a ball ended up when it reached the goal line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalLineResult {
    /// Ball is still above the goal line
    InFlight,
    Saved,
    Goal,
    Wide,
}

/// Whether a ball whose lowest point is `bottom` has reached the goal line
#[inline]
pub fn reached_goal_line(bottom: f32, field_height: f32) -> bool {
    bottom >= field_height
}

/// Classify a ball at `x` that has reached the goal line
pub fn resolve_crossing(x: f32, goalkeeper: Span, goal_mouth: Span) -> GoalLineResult {
    if goalkeeper.contains(x) {
        GoalLineResult::Saved
    } else if goal_mouth.contains(x) {
        GoalLineResult::Goal
    } else {
        GoalLineResult::Wide
    }
}

/// Full goal-line check for a ball at `(x, y)` with the given radius
pub fn check_goal_line(
    x: f32,
    y: f32,
    radius: f32,
    field_height: f32,
    goalkeeper: Span,
    goal_mouth: Span,
) -> GoalLineResult {
    if !reached_goal_line(y + radius, field_height) {
        return GoalLineResult::InFlight;
    }
    resolve_crossing(x, goalkeeper, goal_mouth)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOAL: Span = Span {
        left: 150.0,
        right: 350.0,
    };

    #[test]
    fn test_in_flight_above_line() {
        let keeper = Span::centered(250.0, 60.0);
        let result = check_goal_line(250.0, 384.9, 15.0, 400.0, keeper, GOAL);
        assert_eq!(result, GoalLineResult::InFlight);
    }

    #[test]
    fn test_touching_line_counts_as_crossed() {
        let keeper = Span::centered(250.0, 60.0);
        let result = check_goal_line(250.0, 385.0, 15.0, 400.0, keeper, GOAL);
        assert_eq!(result, GoalLineResult::Saved);
    }

    #[test]
    fn test_save() {
        let keeper = Span::centered(200.0, 60.0);
        assert_eq!(resolve_crossing(200.0, keeper, GOAL), GoalLineResult::Saved);
    }

    #[test]
    fn test_goal() {
        let keeper = Span::centered(400.0, 60.0);
        assert_eq!(resolve_crossing(200.0, keeper, GOAL), GoalLineResult::Goal);
    }

    #[test]
    fn test_wide() {
        let keeper = Span::centered(250.0, 60.0);
        assert_eq!(resolve_crossing(60.0, keeper, GOAL), GoalLineResult::Wide);
        assert_eq!(resolve_crossing(440.0, keeper, GOAL), GoalLineResult::Wide);
    }

    #[test]
    fn test_save_wins_over_goal_mouth() {
        // Keeper straddles the right post; x is inside both spans
        let keeper = Span::centered(340.0, 60.0);
        assert!(keeper.overlaps(&GOAL));
        assert!(keeper.contains(345.0) && GOAL.contains(345.0));
        assert_eq!(resolve_crossing(345.0, keeper, GOAL), GoalLineResult::Saved);
    }

    #[test]
    fn test_save_outside_goal_mouth() {
        let keeper = Span::centered(60.0, 60.0);
        assert_eq!(resolve_crossing(40.0, keeper, GOAL), GoalLineResult::Saved);
    }

    #[test]
    fn test_keeper_edges_inclusive() {
        let keeper = Span::centered(200.0, 60.0);
        assert_eq!(resolve_crossing(170.0, keeper, GOAL), GoalLineResult::Saved);
        assert_eq!(resolve_crossing(230.0, keeper, GOAL), GoalLineResult::Saved);
        assert_eq!(resolve_crossing(230.5, keeper, GOAL), GoalLineResult::Goal);
    }
}
