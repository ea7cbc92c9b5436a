//! Chef AI system — constant pursuit of the player, plus deadline-based
//! respawn of dead chefs.
//!
//! The respawn delay is a deadline stored on the chef itself and checked
//! here on the tick path; nothing re-enters the simulation from a timer
//! callback.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use eggstorm_core::components::{ActorId, Chef, ChefState, Heading, Position};
use eggstorm_core::config::Tuning;
use eggstorm_core::events::GameEvent;
use eggstorm_core::types::{yaw_dir, Deadline, SimTime};

use eggstorm_actor_ai::fsm::chef_pursuit_heading;

use crate::world_setup::random_ground_position;

use super::player_position;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    now: SimTime,
    dt: f64,
    events: &mut Vec<GameEvent>,
) {
    let player_pos = player_position(world);

    let mut moves: Vec<(hecs::Entity, f64)> = Vec::new();
    let mut respawns: Vec<(hecs::Entity, u32)> = Vec::new();
    {
        let mut query = world.query::<(&Chef, &ActorId, &Position, &Heading, &ChefState)>();
        for (entity, (_chef, id, pos, heading, state)) in query.iter() {
            if state.is_dead {
                if state.respawn_at.is_due(now) {
                    respawns.push((entity, id.0));
                }
                continue;
            }
            moves.push((
                entity,
                chef_pursuit_heading(pos.0, player_pos, heading.0),
            ));
        }
    }

    let extent = tuning.world.extent;
    for (entity, new_heading) in moves {
        if let Ok(mut heading) = world.get::<&mut Heading>(entity) {
            heading.0 = new_heading;
        }
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            let dir = yaw_dir(new_heading);
            pos.0.x = (pos.0.x + dir.x * tuning.chef.pursuit_speed * dt).clamp(-extent, extent);
            pos.0.z = (pos.0.z + dir.z * tuning.chef.pursuit_speed * dt).clamp(-extent, extent);
        }
    }

    for (entity, chef_id) in respawns {
        let position = random_ground_position(rng, tuning.chef.spawn_extent, tuning.chef.height);
        if let Ok(mut state) = world.get::<&mut ChefState>(entity) {
            state.is_dead = false;
            state.hits_taken = 0;
            state.next_attack_at = Deadline::default();
        }
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.0 = position;
        }
        events.push(GameEvent::ChefRespawned { chef_id });
        tracing::debug!(chef_id, "chef respawned");
    }
}
