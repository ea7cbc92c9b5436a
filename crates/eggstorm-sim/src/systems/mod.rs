//! Simulation systems, run in a fixed order each tick:
//! player movement → NPC AI → chef AI → fire control → projectile
//! advance → collision & combat → economy.

pub mod chef_ai;
pub mod collision;
pub mod economy;
pub mod fire_control;
pub mod npc_ai;
pub mod player_movement;
pub mod projectiles;
pub mod snapshot;

use glam::DVec3;
use hecs::World;

use eggstorm_core::components::{PlayerAvatar, Position};

/// The player avatar's position (used by several systems).
pub fn player_position(world: &World) -> DVec3 {
    world
        .query::<(&PlayerAvatar, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| pos.0)
        .unwrap_or_default()
}
