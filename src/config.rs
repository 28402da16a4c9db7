//! Game tuning
//!
//! Defaults mirror `consts`. On the web an optional JSON override is read
//! from LocalStorage; anything that fails validation falls back to defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Span;

/// Errors produced while loading a config override
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Goalkeeper ===
    pub goalkeeper_width: f32,
    pub goalkeeper_height: f32,

    // === Goal ===
    pub goal_mouth_left: f32,
    pub goal_mouth_right: f32,
    pub goal_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Added to vertical velocity after each frame's displacement
    pub gravity: f32,

    // === Spawner ===
    pub spawn_interval_ms: u32,
    pub spawn_y: f32,
    pub spawn_inset: f32,
    pub spawn_vx: (f32, f32),
    pub spawn_vy: (f32, f32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            goalkeeper_width: GOALKEEPER_WIDTH,
            goalkeeper_height: GOALKEEPER_HEIGHT,

            goal_mouth_left: GOAL_MOUTH_LEFT,
            goal_mouth_right: GOAL_MOUTH_RIGHT,
            goal_height: GOAL_HEIGHT,

            ball_radius: BALL_RADIUS,
            gravity: GRAVITY,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_y: SPAWN_Y,
            spawn_inset: SPAWN_INSET,
            spawn_vx: (SPAWN_VX_MIN, SPAWN_VX_MAX),
            spawn_vy: (SPAWN_VY_MIN, SPAWN_VY_MAX),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON override. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        let floats = [
            self.field_width,
            self.field_height,
            self.goalkeeper_width,
            self.goalkeeper_height,
            self.goal_mouth_left,
            self.goal_mouth_right,
            self.goal_height,
            self.ball_radius,
            self.gravity,
            self.spawn_y,
            self.spawn_inset,
            self.spawn_vx.0,
            self.spawn_vx.1,
            self.spawn_vy.0,
            self.spawn_vy.1,
        ];
        if !floats.iter().all(|v| v.is_finite()) {
            return invalid("all values must be finite");
        }
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return invalid("field dimensions must be positive");
        }
        if self.goalkeeper_width <= 0.0 || self.goalkeeper_width > self.field_width {
            return invalid("goalkeeper width must be in (0, field_width]");
        }
        if self.goal_mouth_left < 0.0
            || self.goal_mouth_right > self.field_width
            || self.goal_mouth_left >= self.goal_mouth_right
        {
            return invalid("goal mouth must be a non-empty interval inside the field");
        }
        if self.ball_radius <= 0.0 {
            return invalid("ball radius must be positive");
        }
        // Without a downward pull a ball may never reach the goal line
        if self.gravity <= 0.0 {
            return invalid("gravity must be positive");
        }
        if self.spawn_interval_ms == 0 {
            return invalid("spawn interval must be positive");
        }
        if self.spawn_inset * 2.0 >= self.field_width {
            return invalid("spawn inset leaves no room to spawn");
        }
        if self.spawn_vx.0 >= self.spawn_vx.1 || self.spawn_vy.0 >= self.spawn_vy.1 {
            return invalid("spawn velocity ranges must be non-empty");
        }
        Ok(())
    }

    #[inline]
    pub fn goalkeeper_half_width(&self) -> f32 {
        self.goalkeeper_width / 2.0
    }

    /// Starting goalkeeper x
    #[inline]
    pub fn field_center_x(&self) -> f32 {
        self.field_width / 2.0
    }

    /// Range the goalkeeper center may occupy
    pub fn goalkeeper_travel(&self) -> Span {
        let half = self.goalkeeper_half_width();
        Span::new(half, self.field_width - half)
    }

    pub fn goal_mouth(&self) -> Span {
        Span::new(self.goal_mouth_left, self.goal_mouth_right)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "goalkeeper_config";

    /// Load a config override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config override from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring config override: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_derived_values() {
        let config = GameConfig::default();
        assert_eq!(config.goalkeeper_half_width(), 30.0);
        assert_eq!(config.field_center_x(), 250.0);
        assert_eq!(config.goalkeeper_travel(), Span::new(30.0, 470.0));
        assert_eq!(config.goal_mouth(), Span::new(150.0, 350.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "gravity": 0.5 }"#).unwrap();
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.field_width, FIELD_WIDTH);
        assert_eq!(config.spawn_interval_ms, SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }

    #[test]
    fn test_goal_mouth_outside_field_rejected() {
        let err = GameConfig::from_json(r#"{ "goal_mouth_right": 900.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_empty_velocity_range_rejected() {
        let config = GameConfig {
            spawn_vy: (5.0, 5.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_spawn_interval_rejected() {
        let config = GameConfig {
            spawn_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_gravity_rejected() {
        let err = GameConfig::from_json(r#"{ "gravity": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = GameConfig {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        // 1e39 overflows f32 and parses as infinity
        let err = GameConfig::from_json(r#"{ "field_width": 1e39 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = GameConfig {
            spawn_vx: (f32::NEG_INFINITY, 1.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_load_is_default() {
        assert_eq!(GameConfig::load(), GameConfig::default());
    }
}
