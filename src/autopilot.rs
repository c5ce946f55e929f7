//! Idle/demo mode - an AI that plays the game
//!
//! Lives on the input side: it only looks at the state and produces a
//! `TickInput`, exactly like a keyboard collector would.

use crate::sim::{GameState, TickInput};
use crate::{distance, normalize_angle};

/// Demo player
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Fire when the heading is within this angle of the target (radians)
    pub aim_tolerance: f32,
    /// Thrust away when a rock's surface gets this close
    pub panic_distance: f32,
    /// Frames to wait after game over before restarting
    pub restart_delay: u32,
    game_over_frames: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            aim_tolerance: 0.12,
            panic_distance: 70.0,
            restart_delay: 90,
            game_over_frames: 0,
        }
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the controls for the next frame
    pub fn input(&mut self, state: &GameState) -> TickInput {
        let mut input = TickInput::default();

        if state.game_over {
            self.game_over_frames += 1;
            if self.game_over_frames >= self.restart_delay {
                self.game_over_frames = 0;
                input.restart = true;
            }
            return input;
        }
        self.game_over_frames = 0;

        let Some(ship) = state.ship.as_ref() else {
            return input;
        };

        // Target the nearest asteroid surface
        let nearest = state.asteroids.iter().min_by(|a, b| {
            let da = distance(ship.pos, a.pos) - a.radius;
            let db = distance(ship.pos, b.pos) - b.radius;
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });
        let Some(rock) = nearest else {
            return input;
        };

        let to_rock = rock.pos - ship.pos;
        let target = to_rock.y.atan2(to_rock.x);
        let delta = normalize_angle(target - ship.angle);

        let gap = to_rock.length() - rock.radius - ship.radius;
        if gap < self.panic_distance {
            // Too close: turn tail and burn
            let away = normalize_angle(delta + std::f32::consts::PI);
            input.rotate_left = away < -self.aim_tolerance;
            input.rotate_right = away > self.aim_tolerance;
            input.thrust = away.abs() < std::f32::consts::FRAC_PI_4;
            input.fire = delta.abs() < self.aim_tolerance;
        } else {
            input.rotate_left = delta < -self.aim_tolerance;
            input.rotate_right = delta > self.aim_tolerance;
            input.fire = delta.abs() < self.aim_tolerance * 2.0;
        }
        input
    }
}
