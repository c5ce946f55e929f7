//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. A [`Config`] bundles the
//! tuning with the runtime [`Settings`] and is what `step`/`reset` read.
//! Config files are JSON; missing keys keep the compiled defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Difficulty ramp ===
    pub spawn_interval_ms: f32,
    pub fast_spawn_interval_ms: f32,
    pub spawn_interval_floor_ms: f32,
    /// Multiplicative shrink applied after each spawn (< 1)
    pub spawn_decay: f32,

    // === Ship ===
    pub ship_radius: f32,
    pub ship_turn_rate: f32,
    pub ship_thrust: f32,
    /// Per-step velocity damping (< 1), not scaled by dt
    pub ship_friction: f32,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_lifetime_ms: f32,
    pub bullet_radius: f32,
    pub fire_cooldown_ms: f64,

    // === Asteroids ===
    pub asteroid_min_radius: f32,
    pub asteroid_max_radius: f32,
    pub asteroid_drift: f32,
    pub split_radius: f32,
    pub fragment_ratio: f32,
    pub fragment_pos_jitter: f32,
    pub fragment_vel_jitter: f32,

    // === Spawner ===
    pub spawn_edge_margin: f32,
    pub spawn_min_inward_speed: f32,
    pub spawn_max_inward_speed: f32,
    pub spawn_lateral_jitter: f32,
    pub spawn_max_spin: f32,

    // === Collision / playfield ===
    pub collision_forgiveness: f32,
    pub wrap_margin: f32,
    pub cull_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            fast_spawn_interval_ms: FAST_SPAWN_INTERVAL_MS,
            spawn_interval_floor_ms: SPAWN_INTERVAL_FLOOR_MS,
            spawn_decay: SPAWN_DECAY,

            ship_radius: SHIP_RADIUS,
            ship_turn_rate: SHIP_TURN_RATE,
            ship_thrust: SHIP_THRUST,
            ship_friction: SHIP_FRICTION,

            bullet_speed: BULLET_SPEED,
            bullet_lifetime_ms: BULLET_LIFETIME_MS,
            bullet_radius: BULLET_RADIUS,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,

            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_max_radius: ASTEROID_MAX_RADIUS,
            asteroid_drift: ASTEROID_DRIFT,
            split_radius: SPLIT_RADIUS,
            fragment_ratio: FRAGMENT_RATIO,
            fragment_pos_jitter: FRAGMENT_POS_JITTER,
            fragment_vel_jitter: FRAGMENT_VEL_JITTER,

            spawn_edge_margin: SPAWN_EDGE_MARGIN,
            spawn_min_inward_speed: SPAWN_MIN_INWARD_SPEED,
            spawn_max_inward_speed: SPAWN_MAX_INWARD_SPEED,
            spawn_lateral_jitter: SPAWN_LATERAL_JITTER,
            spawn_max_spin: SPAWN_MAX_SPIN,

            collision_forgiveness: COLLISION_FORGIVENESS,
            wrap_margin: WRAP_MARGIN,
            cull_margin: CULL_MARGIN,
        }
    }
}

impl Tuning {
    /// Interval a fresh game starts with
    pub fn base_spawn_interval(&self, fast: bool) -> f32 {
        let base = if fast {
            self.fast_spawn_interval_ms
        } else {
            self.spawn_interval_ms
        };
        base.max(self.spawn_interval_floor_ms)
    }

    /// Interval after one more spawn; never increases, never drops below the floor
    pub fn next_spawn_interval(&self, current: f32) -> f32 {
        (current * self.spawn_decay).max(self.spawn_interval_floor_ms)
    }

    /// Reject values that break the simulation's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(
            name: &'static str,
            value: f32,
            ok: bool,
            expected: &'static str,
        ) -> Result<(), ConfigError> {
            if ok && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange {
                    name,
                    value,
                    expected,
                })
            }
        }

        check(
            "spawn_decay",
            self.spawn_decay,
            self.spawn_decay > 0.0 && self.spawn_decay <= 1.0,
            "0 < x <= 1",
        )?;
        check(
            "spawn_interval_floor_ms",
            self.spawn_interval_floor_ms,
            self.spawn_interval_floor_ms > 0.0,
            "> 0",
        )?;
        check(
            "ship_friction",
            self.ship_friction,
            self.ship_friction > 0.0 && self.ship_friction <= 1.0,
            "0 < x <= 1",
        )?;
        check(
            "asteroid_drift",
            self.asteroid_drift,
            self.asteroid_drift > 0.0 && self.asteroid_drift <= 1.0,
            "0 < x <= 1",
        )?;
        check(
            "asteroid_min_radius",
            self.asteroid_min_radius,
            self.asteroid_min_radius > 0.0 && self.asteroid_min_radius <= self.asteroid_max_radius,
            "0 < x <= asteroid_max_radius",
        )?;
        check(
            "fragment_ratio",
            self.fragment_ratio,
            self.fragment_ratio > 0.0 && self.fragment_ratio < 1.0,
            "0 < x < 1",
        )?;
        check(
            "bullet_lifetime_ms",
            self.bullet_lifetime_ms,
            self.bullet_lifetime_ms > 0.0,
            "> 0",
        )?;
        check(
            "wrap_margin",
            self.wrap_margin,
            self.wrap_margin >= 0.0,
            ">= 0",
        )?;
        check(
            "cull_margin",
            self.cull_margin,
            self.cull_margin >= self.spawn_edge_margin,
            ">= spawn_edge_margin",
        )?;
        Ok(())
    }
}

/// Everything the simulation reads besides its own state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tuning: Tuning,
    pub settings: Settings,
}

impl Config {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"tuning":{"spawn_decay":0.9}}"#).unwrap();
        assert_eq!(config.tuning.spawn_decay, 0.9);
        assert_eq!(config.tuning.split_radius, SPLIT_RADIUS);
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn test_rejects_bad_decay() {
        let err = Config::from_json(r#"{"tuning":{"spawn_decay":1.5}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                name: "spawn_decay",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Config::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert_eq!(
            Config::load_or_default("/definitely/not/here.json"),
            Config::default()
        );
    }

    #[test]
    fn test_spawn_interval_ramp() {
        let tuning = Tuning::default();
        assert_eq!(tuning.base_spawn_interval(false), SPAWN_INTERVAL_MS);
        assert_eq!(tuning.base_spawn_interval(true), FAST_SPAWN_INTERVAL_MS);

        let mut interval = tuning.base_spawn_interval(false);
        for _ in 0..500 {
            let next = tuning.next_spawn_interval(interval);
            assert!(next <= interval);
            assert!(next >= tuning.spawn_interval_floor_ms);
            interval = next;
        }
        assert_eq!(interval, tuning.spawn_interval_floor_ms);
    }

    #[test]
    fn test_round_trip_json() {
        let config = Config::default();
        let json = config.to_json().unwrap();
        assert!(!json.is_empty());
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
