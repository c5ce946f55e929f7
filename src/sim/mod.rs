//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in through `FrameTime`, never from a clock
//! - Seeded RNG only
//! - Stable iteration order (collections keep insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{HitReport, asteroid_points, resolve_bullet_hits, ship_collides};
pub use spawn::{Edge, fragment, spawn_asteroid};
pub use state::{Asteroid, Bullet, GameEvent, GameState, Playfield, Ship};
pub use tick::{Control, FrameTime, TickInput, reset, step};
