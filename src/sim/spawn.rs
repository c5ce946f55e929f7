//! Asteroid spawning
//!
//! New rocks appear just outside a random edge and drift inward. Fragments
//! are spawned around a destroyed parent.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, Playfield};
use crate::rand_range;
use crate::tuning::Tuning;

/// Playfield edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Unit vector pointing from this edge into the playfield
    pub fn inward(&self) -> Vec2 {
        match self {
            Edge::Top => Vec2::Y,
            Edge::Right => Vec2::NEG_X,
            Edge::Bottom => Vec2::NEG_Y,
            Edge::Left => Vec2::X,
        }
    }
}

/// Create one asteroid just outside a uniformly chosen edge, drifting inward
pub fn spawn_asteroid<R: Rng + ?Sized>(
    playfield: &Playfield,
    tuning: &Tuning,
    rng: &mut R,
) -> Asteroid {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let margin = tuning.spawn_edge_margin;

    let pos = match edge {
        Edge::Top => Vec2::new(rand_range(rng, 0.0, playfield.width), -margin),
        Edge::Bottom => Vec2::new(
            rand_range(rng, 0.0, playfield.width),
            playfield.height + margin,
        ),
        Edge::Left => Vec2::new(-margin, rand_range(rng, 0.0, playfield.height)),
        Edge::Right => Vec2::new(
            playfield.width + margin,
            rand_range(rng, 0.0, playfield.height),
        ),
    };

    let inward_speed = rand_range(
        rng,
        tuning.spawn_min_inward_speed,
        tuning.spawn_max_inward_speed,
    );
    let lateral = rand_range(
        rng,
        -tuning.spawn_lateral_jitter,
        tuning.spawn_lateral_jitter,
    );
    let inward = edge.inward();
    let vel = inward * inward_speed + inward.perp() * lateral;

    Asteroid {
        pos,
        vel,
        radius: rand_range(rng, tuning.asteroid_min_radius, tuning.asteroid_max_radius),
        rotation: rand_range(rng, 0.0, std::f32::consts::TAU),
        spin: rand_range(rng, -tuning.spawn_max_spin, tuning.spawn_max_spin),
    }
}

/// Split a destroyed asteroid; empty unless its radius exceeds the split threshold
pub fn fragment<R: Rng + ?Sized>(parent: &Asteroid, tuning: &Tuning, rng: &mut R) -> Vec<Asteroid> {
    if parent.radius <= tuning.split_radius {
        return Vec::new();
    }

    let pj = tuning.fragment_pos_jitter;
    let vj = tuning.fragment_vel_jitter;
    (0..2)
        .map(|_| Asteroid {
            pos: parent.pos + Vec2::new(rand_range(rng, -pj, pj), rand_range(rng, -pj, pj)),
            vel: parent.vel + Vec2::new(rand_range(rng, -vj, vj), rand_range(rng, -vj, vj)),
            radius: parent.radius * tuning.fragment_ratio,
            rotation: parent.rotation,
            spin: rand_range(rng, -tuning.spawn_max_spin, tuning.spawn_max_spin),
        })
        .collect()
}
