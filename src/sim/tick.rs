//! Per-frame simulation step
//!
//! Advances the ship, bullets and asteroids by one frame delta, runs the
//! spawn timer and resolves collisions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{resolve_bullet_hits, ship_collides};
use super::spawn::spawn_asteroid;
use super::state::{Bullet, GameEvent, GameState, Ship};
use crate::consts::FRAME_MS;
use crate::tuning::Config;
use crate::wrap_coord;

/// Named control intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    RotateLeft,
    RotateRight,
    ThrustForward,
    Fire,
    Restart,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::RotateLeft,
        Control::RotateRight,
        Control::ThrustForward,
        Control::Fire,
        Control::Restart,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Control::RotateLeft => "rotateLeft",
            Control::RotateRight => "rotateRight",
            Control::ThrustForward => "thrustForward",
            Control::Fire => "fire",
            Control::Restart => "restart",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Controls held during a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
    pub restart: bool,
}

impl TickInput {
    /// Build a snapshot from the names of held controls; unknown names are ignored
    pub fn from_held<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut input = Self::default();
        for name in names {
            match Control::from_name(name) {
                Some(control) => input.set(control, true),
                None => log::trace!("Ignoring unknown control {name:?}"),
            }
        }
        input
    }

    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::RotateLeft => self.rotate_left = held,
            Control::RotateRight => self.rotate_right = held,
            Control::ThrustForward => self.thrust = held,
            Control::Fire => self.fire = held,
            Control::Restart => self.restart = held,
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        match control {
            Control::RotateLeft => self.rotate_left,
            Control::RotateRight => self.rotate_right,
            Control::ThrustForward => self.thrust,
            Control::Fire => self.fire,
            Control::Restart => self.restart,
        }
    }
}

/// Timing for one step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Wall-clock timestamp (ms); drives the fire cooldown and spawn timer
    pub now_ms: f64,
    /// Clamped frame delta (ms); drives motion
    pub dt_ms: f32,
}

impl FrameTime {
    pub fn new(now_ms: f64, dt_ms: f32) -> Self {
        Self { now_ms, dt_ms }
    }
}

/// Start a fresh game: centered ship, empty field, score 0, base spawn interval
pub fn reset(state: &mut GameState, config: &Config, now_ms: f64) {
    let tuning = &config.tuning;
    state.ship = Some(Ship::new(state.playfield.center(), tuning.ship_radius));
    state.bullets.clear();
    state.asteroids.clear();
    state.score = 0;
    state.last_spawn_ms = now_ms;
    state.spawn_interval_ms = tuning.base_spawn_interval(config.settings.fast_spawn());
    state.last_time_ms = now_ms;
    state.last_shot_ms = None;
    state.game_over = false;
    state.events.clear();
    state.events.push(GameEvent::Reset);
    log::info!(
        "New game (spawn interval {:.0}ms, speed {})",
        state.spawn_interval_ms,
        config.settings.speed.as_str()
    );
}

/// Advance the game state by one frame
pub fn step(state: &mut GameState, input: &TickInput, time: FrameTime, config: &Config) {
    state.events.clear();

    if input.restart {
        reset(state, config, time.now_ms);
        return;
    }
    if state.game_over {
        return;
    }
    let Some(ship) = state.ship.as_mut() else {
        return;
    };

    let tuning = &config.tuning;
    let sim_ms = time.dt_ms.max(0.0) * config.settings.speed_multiplier();
    let dt = sim_ms / FRAME_MS;
    state.last_time_ms = time.now_ms;

    // --- SHIP CONTROLS ---
    if input.rotate_left {
        ship.angle -= tuning.ship_turn_rate * dt;
    }
    if input.rotate_right {
        ship.angle += tuning.ship_turn_rate * dt;
    }
    ship.thrusting = input.thrust;
    if input.thrust {
        ship.vel += ship.forward() * tuning.ship_thrust * dt;
    }

    // --- FIRE ---
    let cooled = state
        .last_shot_ms
        .is_none_or(|last| time.now_ms - last > tuning.fire_cooldown_ms);
    if input.fire && cooled {
        let pos = ship.nose();
        state.bullets.push(Bullet {
            pos,
            vel: ship.vel + ship.forward() * tuning.bullet_speed,
            life_ms: tuning.bullet_lifetime_ms,
        });
        state.last_shot_ms = Some(time.now_ms);
        state.events.push(GameEvent::ShotFired { pos });
        log::trace!("Shot fired at ({:.1}, {:.1})", pos.x, pos.y);
    }

    // --- SHIP MOTION ---
    // Friction applies once per step regardless of dt
    ship.vel *= tuning.ship_friction;
    ship.pos += ship.vel * dt;
    let field = state.playfield;
    ship.pos = Vec2::new(
        wrap_coord(ship.pos.x, field.width, tuning.wrap_margin),
        wrap_coord(ship.pos.y, field.height, tuning.wrap_margin),
    );

    // --- BULLETS ---
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel * dt;
        bullet.life_ms -= sim_ms;
    }
    let before = state.bullets.len();
    state.bullets.retain(|b| b.life_ms > 0.0);
    if state.bullets.len() < before {
        log::trace!("{} bullets expired", before - state.bullets.len());
    }

    // --- SPAWN TIMER ---
    if time.now_ms - state.last_spawn_ms > f64::from(state.spawn_interval_ms) {
        let rock = spawn_asteroid(&field, tuning, &mut state.rng);
        state.events.push(GameEvent::AsteroidSpawned {
            pos: rock.pos,
            radius: rock.radius,
        });
        state.asteroids.push(rock);
        state.last_spawn_ms = time.now_ms;
        state.spawn_interval_ms = tuning.next_spawn_interval(state.spawn_interval_ms);
        log::debug!(
            "Asteroid spawned, next in {:.0}ms ({} on field)",
            state.spawn_interval_ms,
            state.asteroids.len()
        );
    }

    // --- ASTEROIDS ---
    for rock in &mut state.asteroids {
        rock.pos += rock.vel * dt * tuning.asteroid_drift;
        rock.rotation += rock.spin * dt;
    }
    state
        .asteroids
        .retain(|rock| !field.is_beyond(rock.pos, tuning.cull_margin));

    // --- COLLISIONS ---
    let report = resolve_bullet_hits(
        &mut state.asteroids,
        &mut state.bullets,
        tuning,
        &mut state.rng,
        &mut state.events,
    );
    state.score += report.points;

    if let Some(ship) = state.ship.as_ref() {
        if ship_collides(ship, &state.asteroids, tuning.collision_forgiveness) {
            state.game_over = true;
            state.events.push(GameEvent::ShipDestroyed { pos: ship.pos });
            log::info!("Ship destroyed, final score {}", state.score);
        }
    }
}
