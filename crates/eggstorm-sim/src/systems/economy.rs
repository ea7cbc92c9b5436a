//! Player economy system — energy drain, starvation, shop refill — plus
//! the weapon-unlock check invoked from collision resolution.

use glam::DVec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use eggstorm_core::config::Tuning;
use eggstorm_core::enums::GameOverCause;
use eggstorm_core::events::GameEvent;
use eggstorm_core::input::TickInput;
use eggstorm_core::types::{horizontal_distance, Deadline, SimTime};

use crate::progression::PlayerEconomy;
use crate::world_setup::spawn_chef_random;

use super::player_position;

pub fn run(
    world: &mut World,
    economy: &mut PlayerEconomy,
    tuning: &Tuning,
    input: &TickInput,
    now: SimTime,
    events: &mut Vec<GameEvent>,
) {
    if economy.is_dead() {
        return;
    }

    // Energy drains one sample per interval, only while the player has
    // movement intent this tick.
    if economy.energy_sample_due.is_due(now) {
        if input.has_move_intent(tuning.player.analog_dead_zone) {
            economy.energy =
                (economy.energy - tuning.player.energy_drain_per_sample).max(0.0);
        }
        economy.energy_sample_due =
            Deadline::after(now, tuning.player.energy_drain_interval_secs);
    }

    // Starvation: with energy empty, health bleeds at a fixed rate,
    // prorated by real elapsed time and applied in batches. While energy
    // is positive the mark tracks `now`, so no backlog ever accrues.
    if economy.energy <= 0.0 {
        let backlog = now.elapsed_secs - economy.health_drain_mark;
        if backlog >= tuning.player.health_drain_batch_secs {
            economy.apply_damage(tuning.player.starvation_drain_per_sec * backlog);
            economy.health_drain_mark = now.elapsed_secs;
            if economy.health <= 0.0 {
                economy.kill(GameOverCause::Energy, events);
                return;
            }
        }
    } else {
        economy.health_drain_mark = now.elapsed_secs;
    }

    // Shop refill: an overcharge to max + bonus, not a clamped top-up.
    // One-shot per approach — the guard fails until energy drops below
    // max again.
    let player_pos = player_position(world);
    let shop = tuning.world.shop_position;
    let shop_pos = DVec3::new(shop.x, 0.0, shop.y);
    if horizontal_distance(player_pos, shop_pos) < tuning.world.shop_radius
        && economy.energy < economy.max_energy
    {
        economy.energy = economy.max_energy + tuning.world.shop_energy_bonus;
        events.push(GameEvent::EnergyRefilled {
            energy: economy.energy,
        });
        tracing::debug!(energy = economy.energy, "energy refilled at shop");
    }
}

/// Unlock every catalog entry whose EP threshold has been reached, in
/// catalog order. Each unlock makes that weapon active and triggers one
/// level-up. Called after every EP award.
pub fn check_weapon_unlocks(
    world: &mut World,
    economy: &mut PlayerEconomy,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    for slot in 0..economy.weapons.len() {
        let weapon = &economy.weapons[slot];
        if weapon.unlocked || economy.points < weapon.spec.points_required {
            continue;
        }

        let weapon = &mut economy.weapons[slot];
        weapon.unlocked = true;
        events.push(GameEvent::WeaponUnlocked {
            slot,
            name: weapon.spec.name.clone(),
            tier: weapon.spec.tier,
        });
        economy.current_weapon = slot;

        level_up(world, economy, rng, tuning, next_id, events);
    }
}

/// Level-up: more max health, partial refill, one extra chef.
fn level_up(
    world: &mut World,
    economy: &mut PlayerEconomy,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    economy.level += 1;
    economy.max_health += tuning.player.level_up_health_bonus;
    economy.health =
        (economy.health + tuning.player.level_up_health_bonus).min(economy.max_health);

    spawn_chef_random(world, rng, tuning, next_id);

    events.push(GameEvent::LevelUp {
        level: economy.level,
        max_health: economy.max_health,
    });
    tracing::info!(level = economy.level, "level up, reinforcement chef spawned");
}
