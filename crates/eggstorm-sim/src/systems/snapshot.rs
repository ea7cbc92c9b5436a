//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use eggstorm_core::components::*;
use eggstorm_core::enums::{GamePhase, NpcMode};
use eggstorm_core::events::GameEvent;
use eggstorm_core::state::*;
use eggstorm_core::types::SimTime;

use crate::progression::PlayerEconomy;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: SimTime,
    phase: GamePhase,
    economy: &PlayerEconomy,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time,
        phase,
        player: build_player(world, economy),
        weapons: build_weapons(economy),
        npcs: build_npcs(world),
        chefs: build_chefs(world),
        projectiles: build_projectiles(world),
        events,
    }
}

fn build_player(world: &World, economy: &PlayerEconomy) -> PlayerView {
    let (position, yaw) = world
        .query::<(&PlayerAvatar, &Position, &Heading)>()
        .iter()
        .next()
        .map(|(_, (_, pos, heading))| (pos.0, heading.0))
        .unwrap_or_default();

    PlayerView {
        position,
        yaw,
        health: economy.health,
        max_health: economy.max_health,
        energy: economy.energy,
        max_energy: economy.max_energy,
        points: economy.points,
        level: economy.level,
        current_weapon: economy.current_weapon,
        view_mode: economy.view_mode,
        game_over: economy.game_over,
    }
}

fn build_weapons(economy: &PlayerEconomy) -> Vec<WeaponView> {
    economy
        .weapons
        .iter()
        .enumerate()
        .map(|(slot, weapon)| WeaponView {
            name: weapon.spec.name.clone(),
            tier: weapon.spec.tier,
            points_required: weapon.spec.points_required,
            unlocked: weapon.unlocked,
            active: slot == economy.current_weapon,
        })
        .collect()
}

fn build_npcs(world: &World) -> Vec<NpcView> {
    let mut npcs: Vec<NpcView> = world
        .query::<(&Npc, &ActorId, &Position, &Heading, &NpcBehavior)>()
        .iter()
        .map(|(_, (_, id, pos, heading, behavior))| NpcView {
            id: id.0,
            position: pos.0,
            yaw: heading.0,
            fleeing: behavior.mode == NpcMode::Flee,
        })
        .collect();
    npcs.sort_by_key(|npc| npc.id);
    npcs
}

fn build_chefs(world: &World) -> Vec<ChefView> {
    let mut chefs: Vec<ChefView> = world
        .query::<(&Chef, &ActorId, &Position, &Heading, &ChefState)>()
        .iter()
        .map(|(_, (_, id, pos, heading, state))| ChefView {
            id: id.0,
            position: pos.0,
            yaw: heading.0,
            visible: !state.is_dead,
            hits_taken: state.hits_taken,
        })
        .collect();
    chefs.sort_by_key(|chef| chef.id);
    chefs
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&ProjectileState, &ActorId, &Position)>()
        .iter()
        .map(|(_, (_, id, pos))| ProjectileView {
            id: id.0,
            position: pos.0,
        })
        .collect();
    projectiles.sort_by_key(|projectile| projectile.id);
    projectiles
}
