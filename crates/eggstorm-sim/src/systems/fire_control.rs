//! Fire control system — gates fire intent through the active weapon's
//! firing mode and spawns projectile batches.
//!
//! Manual weapons fire once per rising edge of intent. Automatic weapons
//! fire while intent is held, but attempts inside the cooldown window
//! are silently ignored — no queuing, no error.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use eggstorm_core::components::{ActorId, Position, ProjectileState, Velocity};
use eggstorm_core::config::Tuning;
use eggstorm_core::enums::FiringMode;
use eggstorm_core::input::TickInput;
use eggstorm_core::types::{yaw_dir, Deadline, SimTime};

use crate::progression::PlayerEconomy;

use super::player_position;

pub fn run(
    world: &mut World,
    economy: &mut PlayerEconomy,
    tuning: &Tuning,
    input: &TickInput,
    fire_edge: bool,
    rng: &mut ChaCha8Rng,
    now: SimTime,
    next_id: &mut u32,
) {
    let weapon = economy.current();
    if !weapon.unlocked {
        return;
    }
    let firing = weapon.spec.firing;
    let count = weapon.spec.projectiles_per_shot;

    let should_fire = match firing {
        FiringMode::Manual => fire_edge,
        FiringMode::Automatic { cooldown_secs } => {
            if input.fire && economy.next_auto_shot_at.is_due(now) {
                economy.next_auto_shot_at = Deadline::after(now, cooldown_secs);
                true
            } else {
                false
            }
        }
    };
    if !should_fire {
        return;
    }

    let origin = player_position(world);

    // Aim along the full camera forward (pitch included); a degenerate
    // vector falls back to the yaw direction.
    let mut aim = input.camera_forward.normalize_or_zero();
    if aim == DVec3::ZERO {
        aim = yaw_dir(input.camera_yaw);
    }

    let jitter = tuning.projectile.jitter;
    for _ in 0..count {
        let (jx, jy) = if jitter > 0.0 {
            (
                rng.gen_range(-jitter..jitter),
                rng.gen_range(-jitter..jitter),
            )
        } else {
            (0.0, 0.0)
        };
        let dir = DVec3::new(aim.x + jx, aim.y + jy, aim.z).normalize();

        world.spawn((
            ActorId(alloc(next_id)),
            Position(origin),
            Velocity(dir * tuning.projectile.muzzle_speed),
            ProjectileState {
                expires_at: Deadline::after(now, tuning.projectile.lifetime_secs),
            },
        ));
    }
}

fn alloc(next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id += 1;
    id
}
