//! Simulation configuration.
//!
//! Every tuning constant is overridable at engine construction; the
//! defaults come from [`crate::constants`]. Same config + same seed =
//! same simulation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::FiringMode;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// All tunable parameters of the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub npc: NpcTuning,
    pub chef: ChefTuning,
    pub projectile: ProjectileTuning,
    pub world: WorldTuning,
    pub weapons: Vec<WeaponSpec>,
}

impl Tuning {
    /// Whether the weapon catalog is ordered by non-decreasing unlock
    /// threshold — required for unlock checks to process in tier order.
    pub fn catalog_is_ordered(&self) -> bool {
        self.weapons
            .windows(2)
            .all(|w| w[0].points_required <= w[1].points_required)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTuning {
    pub eye_height: f64,
    pub walk_speed: f64,
    pub exhausted_speed: f64,
    pub analog_dead_zone: f64,
    pub max_health: f64,
    pub max_energy: f64,
    pub energy_drain_per_sample: f64,
    pub energy_drain_interval_secs: f64,
    pub starvation_drain_per_sec: f64,
    pub health_drain_batch_secs: f64,
    pub level_up_health_bonus: f64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            eye_height: PLAYER_EYE_HEIGHT,
            walk_speed: PLAYER_WALK_SPEED,
            exhausted_speed: PLAYER_EXHAUSTED_SPEED,
            analog_dead_zone: ANALOG_DEAD_ZONE,
            max_health: PLAYER_MAX_HEALTH,
            max_energy: PLAYER_MAX_ENERGY,
            energy_drain_per_sample: ENERGY_DRAIN_PER_SAMPLE,
            energy_drain_interval_secs: ENERGY_DRAIN_INTERVAL_SECS,
            starvation_drain_per_sec: STARVATION_DRAIN_PER_SEC,
            health_drain_batch_secs: HEALTH_DRAIN_BATCH_SECS,
            level_up_health_bonus: LEVEL_UP_HEALTH_BONUS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcTuning {
    pub initial_count: usize,
    pub wander_speed: f64,
    pub flee_speed: f64,
    pub flee_duration_secs: f64,
    pub heading_change_min_secs: f64,
    pub heading_change_max_secs: f64,
    pub initial_heading_change_max_secs: f64,
    pub hit_radius: f64,
    pub spawn_extent: f64,
    pub height: f64,
    pub hit_reward: u64,
}

impl Default for NpcTuning {
    fn default() -> Self {
        Self {
            initial_count: NPC_INITIAL_COUNT,
            wander_speed: NPC_WANDER_SPEED,
            flee_speed: NPC_FLEE_SPEED,
            flee_duration_secs: NPC_FLEE_DURATION_SECS,
            heading_change_min_secs: NPC_HEADING_CHANGE_MIN_SECS,
            heading_change_max_secs: NPC_HEADING_CHANGE_MAX_SECS,
            initial_heading_change_max_secs: NPC_INITIAL_HEADING_CHANGE_MAX_SECS,
            hit_radius: NPC_HIT_RADIUS,
            spawn_extent: NPC_SPAWN_EXTENT,
            height: NPC_HEIGHT,
            hit_reward: NPC_HIT_REWARD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChefTuning {
    pub initial_count: usize,
    /// The first chef spawns here; later spawns are random.
    pub first_spawn: DVec2,
    pub pursuit_speed: f64,
    pub hit_radius: f64,
    pub kill_hits: u32,
    pub attack_radius: f64,
    pub attack_cooldown_secs: f64,
    pub attack_damage: f64,
    pub respawn_delay_secs: f64,
    pub spawn_extent: f64,
    pub height: f64,
    pub kill_reward: u64,
}

impl Default for ChefTuning {
    fn default() -> Self {
        Self {
            initial_count: CHEF_INITIAL_COUNT,
            first_spawn: DVec2::new(CHEF_FIRST_SPAWN_X, CHEF_FIRST_SPAWN_Z),
            pursuit_speed: CHEF_PURSUIT_SPEED,
            hit_radius: CHEF_HIT_RADIUS,
            kill_hits: CHEF_KILL_HITS,
            attack_radius: CHEF_ATTACK_RADIUS,
            attack_cooldown_secs: CHEF_ATTACK_COOLDOWN_SECS,
            attack_damage: CHEF_ATTACK_DAMAGE,
            respawn_delay_secs: CHEF_RESPAWN_DELAY_SECS,
            spawn_extent: CHEF_SPAWN_EXTENT,
            height: CHEF_HEIGHT,
            kill_reward: CHEF_KILL_REWARD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileTuning {
    pub muzzle_speed: f64,
    pub lifetime_secs: f64,
    pub jitter: f64,
    pub gravity: f64,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            muzzle_speed: PROJECTILE_MUZZLE_SPEED,
            lifetime_secs: PROJECTILE_LIFETIME_SECS,
            jitter: PROJECTILE_JITTER,
            gravity: PROJECTILE_GRAVITY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldTuning {
    pub extent: f64,
    pub shop_position: DVec2,
    pub shop_radius: f64,
    pub shop_energy_bonus: f64,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            extent: WORLD_EXTENT,
            shop_position: DVec2::new(SHOP_X, SHOP_Z),
            shop_radius: SHOP_RADIUS,
            shop_energy_bonus: SHOP_ENERGY_BONUS,
        }
    }
}

/// Static catalog entry for a weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub name: String,
    pub tier: u32,
    /// EP threshold at which the weapon unlocks.
    pub points_required: u64,
    pub firing: FiringMode,
    pub projectiles_per_shot: u32,
}

impl WeaponSpec {
    fn new(
        name: &str,
        tier: u32,
        points_required: u64,
        firing: FiringMode,
        projectiles_per_shot: u32,
    ) -> Self {
        Self {
            name: name.to_owned(),
            tier,
            points_required,
            firing,
            projectiles_per_shot,
        }
    }
}

/// The default 6-entry weapon catalog, ordered by unlock threshold.
pub fn default_weapon_catalog() -> Vec<WeaponSpec> {
    use FiringMode::*;
    vec![
        WeaponSpec::new("Hand", 1, 0, Manual, 1),
        WeaponSpec::new(
            "Cardboard Launcher",
            2,
            100,
            Automatic { cooldown_secs: 0.5 },
            1,
        ),
        WeaponSpec::new(
            "Plastic Launcher",
            3,
            500,
            Automatic { cooldown_secs: 0.3 },
            2,
        ),
        WeaponSpec::new(
            "Metal Launcher",
            4,
            3000,
            Automatic { cooldown_secs: 0.1 },
            5,
        ),
        WeaponSpec::new("Egg RPG", 6, 10_000, Manual, 200),
        WeaponSpec::new("Egg Nuke", 7, 60_000, Manual, 1000),
    ]
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player: PlayerTuning::default(),
            npc: NpcTuning::default(),
            chef: ChefTuning::default(),
            projectile: ProjectileTuning::default(),
            world: WorldTuning::default(),
            weapons: default_weapon_catalog(),
        }
    }
}
