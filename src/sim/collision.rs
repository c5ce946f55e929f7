//! Collision detection and resolution
//!
//! Everything is circle vs circle. Removal walks the collections back to
//! front so indices stay valid while they shrink.

use rand::Rng;

use super::spawn::fragment;
use super::state::{Asteroid, Bullet, GameEvent, Ship};
use crate::distance;
use crate::tuning::Tuning;

/// Result of a bullet pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitReport {
    /// Points earned this pass
    pub points: u64,
    pub destroyed: usize,
    pub fragments: usize,
}

/// Points for destroying an asteroid; smaller rocks are worth more
#[inline]
pub fn asteroid_points(radius: f32) -> u64 {
    (100.0 - radius).floor().max(0.0) as u64
}

/// True if a bullet overlaps an asteroid
#[inline]
pub fn bullet_hits(bullet: &Bullet, asteroid: &Asteroid, bullet_radius: f32) -> bool {
    distance(bullet.pos, asteroid.pos) < asteroid.radius + bullet_radius
}

/// True if the ship touches an asteroid (with some forgiveness)
#[inline]
pub fn ship_hits(ship: &Ship, asteroid: &Asteroid, forgiveness: f32) -> bool {
    distance(ship.pos, asteroid.pos) < asteroid.radius + ship.radius - forgiveness
}

/// Resolve bullet/asteroid hits
///
/// Each asteroid takes at most one bullet and each bullet destroys at most one
/// asteroid. Fragments are appended after the scan so they cannot be hit in
/// the same step.
pub fn resolve_bullet_hits<R: Rng + ?Sized>(
    asteroids: &mut Vec<Asteroid>,
    bullets: &mut Vec<Bullet>,
    tuning: &Tuning,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> HitReport {
    let mut report = HitReport::default();
    let mut spawned = Vec::new();

    for ai in (0..asteroids.len()).rev() {
        let hit = (0..bullets.len())
            .rev()
            .find(|&bi| bullet_hits(&bullets[bi], &asteroids[ai], tuning.bullet_radius));

        if let Some(bi) = hit {
            bullets.remove(bi);
            let rock = asteroids.remove(ai);
            let points = asteroid_points(rock.radius);
            let kids = fragment(&rock, tuning, rng);

            log::debug!(
                "Asteroid r={:.1} destroyed for {} points, {} fragments",
                rock.radius,
                points,
                kids.len()
            );
            events.push(GameEvent::AsteroidDestroyed {
                pos: rock.pos,
                radius: rock.radius,
                points,
                fragments: kids.len(),
            });

            report.points += points;
            report.destroyed += 1;
            report.fragments += kids.len();
            spawned.extend(kids);
        }
    }

    asteroids.extend(spawned);
    report
}

/// True if any asteroid touches the ship
pub fn ship_collides(ship: &Ship, asteroids: &[Asteroid], forgiveness: f32) -> bool {
    asteroids
        .iter()
        .any(|rock| ship_hits(ship, rock, forgiveness))
}
