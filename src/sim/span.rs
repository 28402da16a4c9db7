//! Horizontal interval geometry for the goal mouth and goalkeeper
//!
//! Both ends are inclusive: a ball exactly on an edge counts as inside.

use serde::{Deserialize, Serialize};

/// A closed horizontal interval `[left, right]` in field units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub left: f32,
    pub right: f32,
}

impl Span {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Span of the given width centered on `center`
    pub fn centered(center: f32, width: f32) -> Self {
        let half = width / 2.0;
        Self::new(center - half, center + half)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        x >= self.left && x <= self.right
    }

    /// Clamp `x` into the span
    #[inline]
    pub fn clamp(&self, x: f32) -> f32 {
        x.max(self.left).min(self.right)
    }

    /// Whether the two spans share at least one point
    pub fn overlaps(&self, other: &Span) -> bool {
        self.left <= other.right && other.left <= self.right
    }
}
