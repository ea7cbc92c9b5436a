//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::NpcMode;
use crate::types::Deadline;

/// World-space position in simulation units. y is up; y = 0 is the ground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Velocity in units/s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Facing yaw in radians (0 = +Z, increasing toward +X).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading(pub f64);

/// Stable external identity, unique per live entity and never reused
/// while referenced by collision logic. Assigned from an engine counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Marks the player's avatar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerAvatar;

/// Marks a wandering NPC.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Npc;

/// Marks a hostile chef.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Chef;

/// NPC behavior state.
///
/// While `mode == Flee` and `flee_until` is not due, the heading is
/// recomputed every tick as repulsion from the player and the wander
/// timer is ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NpcBehavior {
    pub mode: NpcMode,
    /// Next wander heading resample.
    pub next_heading_change: Deadline,
    /// Flee mode expiry.
    pub flee_until: Deadline,
}

/// Chef combat state.
///
/// Alive → (hits reach the kill threshold) → dead (invisible, score
/// awarded, respawn deadline armed) → (deadline due) → alive again at a
/// fresh random position with counters reset. Dead chefs take no part in
/// movement, collision, or attacks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ChefState {
    pub hits_taken: u32,
    pub is_dead: bool,
    /// Earliest time the next melee attack may land.
    pub next_attack_at: Deadline,
    /// Only meaningful while dead.
    pub respawn_at: Deadline,
}

/// Projectile lifetime state. A projectile is destroyed by exactly one
/// of: expiry, falling below the ground plane, or its first resolved hit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileState {
    pub expires_at: Deadline,
}
