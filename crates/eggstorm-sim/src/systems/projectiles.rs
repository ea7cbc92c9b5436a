//! Projectile advance system.
//!
//! Integrates ballistic motion (`pos += vel * dt`, then gravity pulls
//! the vertical velocity down) and expires projectiles that aged out or
//! fell below the ground plane — in either case with no side effect
//! beyond removal. Hit-driven removal belongs to the collision system.

use hecs::{Entity, World};

use eggstorm_core::components::{Position, ProjectileState, Velocity};
use eggstorm_core::config::Tuning;
use eggstorm_core::types::SimTime;

/// Advance all projectiles and remove expired ones.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    tuning: &Tuning,
    now: SimTime,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (pos, vel, projectile)) in
        world.query_mut::<(&mut Position, &mut Velocity, &ProjectileState)>()
    {
        pos.0 += vel.0 * dt;
        vel.0.y -= tuning.projectile.gravity * dt;

        if projectile.expires_at.is_due(now) || pos.0.y < 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
