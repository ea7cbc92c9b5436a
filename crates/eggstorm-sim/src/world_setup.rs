//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player avatar, the initial NPC population, and chefs with
//! appropriate component bundles.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use eggstorm_core::components::*;
use eggstorm_core::config::Tuning;
use eggstorm_core::enums::NpcMode;
use eggstorm_core::types::{Deadline, SimTime};

/// Set up the initial world: player avatar, NPC population, and the
/// first chef at its fixed spot (any further initial chefs random).
pub fn setup_world(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning, next_id: &mut u32) {
    let now = SimTime::default();

    spawn_player(world, tuning, next_id);

    for _ in 0..tuning.npc.initial_count {
        spawn_npc(world, rng, tuning, next_id, now);
    }

    for i in 0..tuning.chef.initial_count {
        let position = if i == 0 {
            DVec3::new(
                tuning.chef.first_spawn.x,
                tuning.chef.height,
                tuning.chef.first_spawn.y,
            )
        } else {
            random_ground_position(rng, tuning.chef.spawn_extent, tuning.chef.height)
        };
        spawn_chef(world, next_id, position);
    }
}

/// Spawn the player avatar at the origin, eye height off the ground.
pub fn spawn_player(world: &mut World, tuning: &Tuning, next_id: &mut u32) -> hecs::Entity {
    world.spawn((
        PlayerAvatar,
        alloc_id(next_id),
        Position(DVec3::new(0.0, tuning.player.eye_height, 0.0)),
        Heading(0.0),
    ))
}

/// Spawn a wandering NPC at a random position. The first heading change
/// comes early so freshly spawned crowds don't all march in step.
pub fn spawn_npc(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    next_id: &mut u32,
    now: SimTime,
) -> hecs::Entity {
    let position = random_ground_position(rng, tuning.npc.spawn_extent, tuning.npc.height);
    let heading = rng.gen_range(0.0..std::f64::consts::TAU);
    let first_change = rng.gen_range(0.0..tuning.npc.initial_heading_change_max_secs);

    world.spawn((
        Npc,
        alloc_id(next_id),
        Position(position),
        Heading(heading),
        NpcBehavior {
            mode: NpcMode::Wander,
            next_heading_change: Deadline::after(now, first_change),
            flee_until: Deadline::default(),
        },
    ))
}

/// Spawn a live chef at the given position.
pub fn spawn_chef(world: &mut World, next_id: &mut u32, position: DVec3) -> hecs::Entity {
    world.spawn((
        Chef,
        alloc_id(next_id),
        Position(position),
        Heading(0.0),
        ChefState::default(),
    ))
}

/// Spawn a live chef at a random position (level-up reinforcements).
pub fn spawn_chef_random(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    next_id: &mut u32,
) -> hecs::Entity {
    let position = random_ground_position(rng, tuning.chef.spawn_extent, tuning.chef.height);
    spawn_chef(world, next_id, position)
}

/// Uniform random ground position within ±extent on x/z.
pub fn random_ground_position(rng: &mut ChaCha8Rng, extent: f64, height: f64) -> DVec3 {
    DVec3::new(
        rng.gen_range(-extent..extent),
        height,
        rng.gen_range(-extent..extent),
    )
}

fn alloc_id(next_id: &mut u32) -> ActorId {
    let id = ActorId(*next_id);
    *next_id += 1;
    id
}
