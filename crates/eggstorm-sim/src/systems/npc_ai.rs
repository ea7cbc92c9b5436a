//! NPC AI system — evaluates the wander/flee FSM for each NPC, then
//! integrates movement at the speed matching the resulting mode.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use eggstorm_core::components::{Heading, Npc, NpcBehavior, Position};
use eggstorm_core::config::Tuning;
use eggstorm_core::enums::NpcMode;
use eggstorm_core::types::{yaw_dir, SimTime};

use eggstorm_actor_ai::fsm::{evaluate_npc, NpcContext, NpcUpdate};

use super::player_position;

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning, now: SimTime, dt: f64) {
    let player_pos = player_position(world);

    // Collect updates in a buffer to avoid borrow issues with hecs.
    let mut updates: Vec<(hecs::Entity, NpcUpdate)> = Vec::new();
    {
        let mut query = world.query::<(&Npc, &Position, &Heading, &NpcBehavior)>();
        for (entity, (_npc, pos, heading, behavior)) in query.iter() {
            let ctx = NpcContext {
                mode: behavior.mode,
                heading: heading.0,
                next_heading_change: behavior.next_heading_change,
                flee_until: behavior.flee_until,
                position: pos.0,
                player_position: player_pos,
                now,
            };
            updates.push((entity, evaluate_npc(&ctx, &tuning.npc, rng)));
        }
    }

    let extent = tuning.world.extent;
    for (entity, update) in updates {
        if let Ok(mut behavior) = world.get::<&mut NpcBehavior>(entity) {
            behavior.mode = update.mode;
            behavior.next_heading_change = update.next_heading_change;
        }
        if let Ok(mut heading) = world.get::<&mut Heading>(entity) {
            heading.0 = update.heading;
        }

        let speed = match update.mode {
            NpcMode::Wander => tuning.npc.wander_speed,
            NpcMode::Flee => tuning.npc.flee_speed,
        };
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            let dir = yaw_dir(update.heading);
            pos.0.x = (pos.0.x + dir.x * speed * dt).clamp(-extent, extent);
            pos.0.z = (pos.0.z + dir.z * speed * dt).clamp(-extent, extent);
        }
    }
}
