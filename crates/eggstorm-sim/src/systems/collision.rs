//! Collision & combat resolution.
//!
//! Runs after projectile advance. Iteration order is deterministic:
//! projectiles in ActorId order, and for each projectile NPCs before
//! chefs, each in ActorId order. A projectile is destroyed atomically
//! with its first resolved hit and is never tested again, so an effect
//! can only be awarded once per projectile.
//!
//! Chef melee attacks also resolve here, after projectile hits.

use glam::DVec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use eggstorm_core::components::{ActorId, Chef, ChefState, Npc, NpcBehavior, Position, ProjectileState};
use eggstorm_core::config::Tuning;
use eggstorm_core::enums::{GameOverCause, NpcMode};
use eggstorm_core::events::GameEvent;
use eggstorm_core::types::{Deadline, SimTime};

use crate::progression::PlayerEconomy;

use super::{economy::check_weapon_unlocks, player_position};

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    economy: &mut PlayerEconomy,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    now: SimTime,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    let projectiles = collect_sorted::<ProjectileState>(world);
    let npcs = collect_sorted::<Npc>(world);
    let chefs = collect_sorted::<Chef>(world);

    for (projectile, _id, projectile_pos) in &projectiles {
        if resolve_npc_hit(world, economy, rng, tuning, now, next_id, events, *projectile_pos, &npcs)
        {
            let _ = world.despawn(*projectile);
            continue;
        }
        if resolve_chef_hit(world, economy, rng, tuning, now, next_id, events, *projectile_pos, &chefs)
        {
            let _ = world.despawn(*projectile);
        }
    }

    resolve_melee(world, economy, tuning, now, events, &chefs);
}

/// Entities carrying marker `M`, with id and position, in ActorId order.
fn collect_sorted<M: hecs::Component>(world: &World) -> Vec<(hecs::Entity, u32, DVec3)> {
    let mut list: Vec<_> = world
        .query::<(&M, &ActorId, &Position)>()
        .iter()
        .map(|(entity, (_, id, pos))| (entity, id.0, pos.0))
        .collect();
    list.sort_by_key(|(_, id, _)| *id);
    list
}

/// First NPC within the hit radius takes the hit: +1 EP, flee mode with
/// a fresh expiry, unlock check. Returns whether the projectile landed.
#[allow(clippy::too_many_arguments)]
fn resolve_npc_hit(
    world: &mut World,
    economy: &mut PlayerEconomy,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    now: SimTime,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
    projectile_pos: DVec3,
    npcs: &[(hecs::Entity, u32, DVec3)],
) -> bool {
    for (npc, npc_id, npc_pos) in npcs {
        if projectile_pos.distance(*npc_pos) >= tuning.npc.hit_radius {
            continue;
        }

        economy.award_points(tuning.npc.hit_reward);
        if let Ok(mut behavior) = world.get::<&mut NpcBehavior>(*npc) {
            behavior.mode = NpcMode::Flee;
            behavior.flee_until = Deadline::after(now, tuning.npc.flee_duration_secs);
        }
        events.push(GameEvent::NpcHit { npc_id: *npc_id });
        check_weapon_unlocks(world, economy, rng, tuning, next_id, events);
        return true;
    }
    false
}

/// First live chef within the hit radius takes the hit. The lethal hit
/// marks it dead, awards the kill reward, and arms the respawn deadline
/// in one step; the projectile is destroyed lethal or not.
#[allow(clippy::too_many_arguments)]
fn resolve_chef_hit(
    world: &mut World,
    economy: &mut PlayerEconomy,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    now: SimTime,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
    projectile_pos: DVec3,
    chefs: &[(hecs::Entity, u32, DVec3)],
) -> bool {
    for (chef, chef_id, chef_pos) in chefs {
        // Re-read liveness each time: an earlier projectile this tick
        // may already have killed this chef.
        let killed = {
            let Ok(mut state) = world.get::<&mut ChefState>(*chef) else {
                continue;
            };
            if state.is_dead || projectile_pos.distance(*chef_pos) >= tuning.chef.hit_radius {
                continue;
            }
            state.hits_taken += 1;
            if state.hits_taken >= tuning.chef.kill_hits {
                state.is_dead = true;
                state.respawn_at = Deadline::after(now, tuning.chef.respawn_delay_secs);
                true
            } else {
                false
            }
        };

        if killed {
            economy.award_points(tuning.chef.kill_reward);
            events.push(GameEvent::ChefKilled { chef_id: *chef_id });
            tracing::debug!(chef_id = *chef_id, "chef killed");
            check_weapon_unlocks(world, economy, rng, tuning, next_id, events);
        }
        return true;
    }
    false
}

/// Live chefs inside the engagement radius whose attack cooldown has
/// elapsed each land one melee hit.
fn resolve_melee(
    world: &mut World,
    economy: &mut PlayerEconomy,
    tuning: &Tuning,
    now: SimTime,
    events: &mut Vec<GameEvent>,
    chefs: &[(hecs::Entity, u32, DVec3)],
) {
    let player_pos = player_position(world);

    for (chef, _id, chef_pos) in chefs {
        if economy.is_dead() {
            return;
        }
        let Ok(mut state) = world.get::<&mut ChefState>(*chef) else {
            continue;
        };
        if state.is_dead
            || chef_pos.distance(player_pos) >= tuning.chef.attack_radius
            || !state.next_attack_at.is_due(now)
        {
            continue;
        }

        state.next_attack_at = Deadline::after(now, tuning.chef.attack_cooldown_secs);
        drop(state);

        economy.apply_damage(tuning.chef.attack_damage);
        if economy.health <= 0.0 {
            economy.kill(GameOverCause::Chef, events);
        }
    }
}
