//! Rock Drift - A wrap-around asteroid field arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance and the config file
//! - `settings`: Runtime toggles (game speed, spawn rate, resolution scale)
//! - `driver`: Frame clock, renderer contract and game loop
//! - `autopilot`: Demo mode input

pub mod autopilot;
pub mod driver;
pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use settings::{GameSpeed, ResolutionScale, Settings, SpawnRate};
pub use tuning::{Config, Tuning};

use glam::Vec2;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Nominal frame length; velocities are expressed in units per frame of this length
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Driver clamps frame deltas to this bound
    pub const MAX_FRAME_DT_MS: f32 = 40.0;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 960.0;
    pub const PLAYFIELD_HEIGHT: f32 = 720.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 14.0;
    /// Heading change per frame while a rotate control is held (radians)
    pub const SHIP_TURN_RATE: f32 = 0.075;
    /// Velocity added per frame while thrusting
    pub const SHIP_THRUST: f32 = 0.12;
    /// Multiplicative damping applied once per step
    pub const SHIP_FRICTION: f32 = 0.99;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 7.0;
    pub const BULLET_LIFETIME_MS: f32 = 1100.0;
    pub const BULLET_RADIUS: f32 = 2.0;
    pub const FIRE_COOLDOWN_MS: f64 = 180.0;

    /// Asteroid defaults
    pub const ASTEROID_MIN_RADIUS: f32 = 18.0;
    pub const ASTEROID_MAX_RADIUS: f32 = 44.0;
    /// Asteroids drift slightly slower than their raw velocity
    pub const ASTEROID_DRIFT: f32 = 0.8;
    pub const SPLIT_RADIUS: f32 = 26.0;
    pub const FRAGMENT_RATIO: f32 = 0.55;
    pub const FRAGMENT_POS_JITTER: f32 = 10.0;
    pub const FRAGMENT_VEL_JITTER: f32 = 1.0;

    /// Spawner defaults
    pub const SPAWN_EDGE_MARGIN: f32 = 40.0;
    pub const SPAWN_MIN_INWARD_SPEED: f32 = 0.3;
    pub const SPAWN_MAX_INWARD_SPEED: f32 = 1.1;
    pub const SPAWN_LATERAL_JITTER: f32 = 0.6;
    pub const SPAWN_MAX_SPIN: f32 = 0.03;

    /// Difficulty ramp
    pub const SPAWN_INTERVAL_MS: f32 = 1400.0;
    pub const FAST_SPAWN_INTERVAL_MS: f32 = 700.0;
    pub const SPAWN_INTERVAL_FLOOR_MS: f32 = 500.0;
    pub const SPAWN_DECAY: f32 = 0.98;

    /// Collision slack subtracted from ship/asteroid contact distance
    pub const COLLISION_FORGIVENESS: f32 = 6.0;

    /// Ship wraps once it leaves the playfield by this much
    pub const WRAP_MARGIN: f32 = 50.0;
    /// Asteroids are culled once they leave the playfield by this much
    pub const CULL_MARGIN: f32 = 200.0;
}

/// Uniform random value in `[min, max)`; returns `min` for an empty range
#[inline]
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Wrap a coordinate into `[-margin, extent + margin]`, teleporting to the opposite margin
#[inline]
pub fn wrap_coord(value: f32, extent: f32, margin: f32) -> f32 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector for a heading angle
#[inline]
pub fn heading_vec(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_rand_range_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rand_range(&mut rng, -0.6, 0.6);
            assert!((-0.6..0.6).contains(&v));
        }
        assert_eq!(rand_range(&mut rng, 3.0, 3.0), 3.0);
    }

    #[test]
    fn test_wrap_coord() {
        assert_eq!(wrap_coord(-51.0, 800.0, 50.0), 850.0);
        assert_eq!(wrap_coord(851.0, 800.0, 50.0), -50.0);
        assert_eq!(wrap_coord(-50.0, 800.0, 50.0), -50.0);
        assert_eq!(wrap_coord(400.0, 800.0, 50.0), 400.0);
    }

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::ZERO, Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_angle() {
        use std::f32::consts::PI;
        assert!((normalize_angle(2.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(-2.5 * PI) + 0.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-6);
        assert_eq!(normalize_angle(PI), -PI);
    }
}
