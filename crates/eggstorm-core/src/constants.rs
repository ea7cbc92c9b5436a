//! Default simulation constants and tuning parameters.
//!
//! Everything here is a default: the runtime values live in
//! [`crate::config::Tuning`] and are overridable at engine construction.

// --- World ---

/// Entities are clamped horizontally to ±WORLD_EXTENT after integration.
pub const WORLD_EXTENT: f64 = 90.0;

/// Largest delta the engine will integrate in a single tick. Host frames
/// stalled longer than this (tab switch, debugger) advance by this much.
pub const MAX_TICK_DELTA_SECS: f64 = 0.25;

// --- Player ---

/// Muzzle/camera height above the ground.
pub const PLAYER_EYE_HEIGHT: f64 = 1.7;

/// Walk speed with energy remaining (units/s).
pub const PLAYER_WALK_SPEED: f64 = 5.5;

/// Walk speed while exhausted (energy at zero).
pub const PLAYER_EXHAUSTED_SPEED: f64 = 2.0;

/// Analog stick components below this magnitude are treated as zero.
pub const ANALOG_DEAD_ZONE: f64 = 0.1;

pub const PLAYER_MAX_HEALTH: f64 = 100.0;

pub const PLAYER_MAX_ENERGY: f64 = 200.0;

/// Energy lost per drain sample while the player has movement intent.
pub const ENERGY_DRAIN_PER_SAMPLE: f64 = 10.0 / 60.0;

/// Interval between energy drain samples (seconds).
pub const ENERGY_DRAIN_INTERVAL_SECS: f64 = 1.0;

/// Health lost per second while energy is empty.
pub const STARVATION_DRAIN_PER_SEC: f64 = 5.0;

/// Starvation drain is batched: applied once the backlog reaches this.
pub const HEALTH_DRAIN_BATCH_SECS: f64 = 0.2;

/// Max-health increase (and refill amount) per level-up.
pub const LEVEL_UP_HEALTH_BONUS: f64 = 25.0;

// --- NPCs ---

/// NPCs spawned when the world is set up.
pub const NPC_INITIAL_COUNT: usize = 10;

/// Wander speed (units/s).
pub const NPC_WANDER_SPEED: f64 = 2.0;

/// Flee speed (units/s).
pub const NPC_FLEE_SPEED: f64 = 5.0;

/// How long a hit NPC keeps fleeing (seconds).
pub const NPC_FLEE_DURATION_SECS: f64 = 5.0;

/// Wander heading resample interval bounds (seconds).
pub const NPC_HEADING_CHANGE_MIN_SECS: f64 = 2.0;
pub const NPC_HEADING_CHANGE_MAX_SECS: f64 = 5.0;

/// The first resample after spawn happens within this many seconds.
pub const NPC_INITIAL_HEADING_CHANGE_MAX_SECS: f64 = 3.0;

/// Projectile hit radius against an NPC.
pub const NPC_HIT_RADIUS: f64 = 0.8;

/// NPCs spawn uniformly within ±NPC_SPAWN_EXTENT on x/z.
pub const NPC_SPAWN_EXTENT: f64 = 40.0;

/// NPC body center height above the ground.
pub const NPC_HEIGHT: f64 = 0.8;

/// EP awarded for hitting an NPC.
pub const NPC_HIT_REWARD: u64 = 1;

// --- Chefs ---

/// Chefs alive when the world is set up.
pub const CHEF_INITIAL_COUNT: usize = 1;

/// The first chef spawns at a fixed spot instead of a random one.
pub const CHEF_FIRST_SPAWN_X: f64 = 20.0;
pub const CHEF_FIRST_SPAWN_Z: f64 = -20.0;

/// Pursuit speed (units/s) — deliberately slow.
pub const CHEF_PURSUIT_SPEED: f64 = 1.5;

/// Projectile hit radius against a chef (bigger hitbox than NPCs).
pub const CHEF_HIT_RADIUS: f64 = 0.9;

/// Projectile hits needed to kill a chef.
pub const CHEF_KILL_HITS: u32 = 4;

/// Melee engagement radius.
pub const CHEF_ATTACK_RADIUS: f64 = 2.0;

/// Minimum interval between melee attacks from one chef (seconds).
pub const CHEF_ATTACK_COOLDOWN_SECS: f64 = 2.0;

/// Health removed per melee attack.
pub const CHEF_ATTACK_DAMAGE: f64 = 25.0;

/// Delay between a chef dying and respawning (seconds).
pub const CHEF_RESPAWN_DELAY_SECS: f64 = 10.0;

/// Respawn positions are uniform within ±CHEF_SPAWN_EXTENT on x/z.
pub const CHEF_SPAWN_EXTENT: f64 = 40.0;

/// Chef body center height above the ground.
pub const CHEF_HEIGHT: f64 = 0.9;

/// EP awarded for killing a chef.
pub const CHEF_KILL_REWARD: u64 = 3;

// --- Projectiles ---

/// Muzzle speed (units/s).
pub const PROJECTILE_MUZZLE_SPEED: f64 = 30.0;

/// Projectiles expire this long after spawning (seconds).
pub const PROJECTILE_LIFETIME_SECS: f64 = 3.0;

/// Uniform aim jitter bound on the horizontal and vertical components.
pub const PROJECTILE_JITTER: f64 = 0.1;

/// Downward acceleration (units/s²).
pub const PROJECTILE_GRAVITY: f64 = 9.8;

// --- Shop ---

/// Horizontal position of the shop.
pub const SHOP_X: f64 = 20.0;
pub const SHOP_Z: f64 = 20.0;

/// Refill triggers within this horizontal distance of the shop.
pub const SHOP_RADIUS: f64 = 6.0;

/// Refill sets energy to max + this bonus (an overcharge, not a clamp).
pub const SHOP_ENERGY_BONUS: f64 = 500.0;
