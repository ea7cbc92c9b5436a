//! Events emitted by the simulation for UI and audio feedback.
//!
//! Delivered inside each tick's snapshot; the presentation layer reacts
//! to them without ever re-entering the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::GameOverCause;

/// One-shot notifications collected during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A weapon crossed its EP threshold and became the active weapon.
    WeaponUnlocked { slot: usize, name: String, tier: u32 },
    /// Level-up accompanying a weapon unlock.
    LevelUp { level: u32, max_health: f64 },
    /// A projectile tagged an NPC.
    NpcHit { npc_id: u32 },
    /// A chef took its final hit.
    ChefKilled { chef_id: u32 },
    /// A dead chef came back at a fresh position.
    ChefRespawned { chef_id: u32 },
    /// The shop topped the player up past max energy.
    EnergyRefilled { energy: f64 },
    /// Terminal: the player died.
    GameOver { cause: GameOverCause },
}
