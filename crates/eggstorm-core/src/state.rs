//! Game state snapshot — the complete visible state handed to the
//! presentation layer each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{GameOverCause, GamePhase, ViewMode};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state returned from every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub weapons: Vec<WeaponView>,
    pub npcs: Vec<NpcView>,
    pub chefs: Vec<ChefView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events that fired during this tick, in order.
    pub events: Vec<GameEvent>,
}

/// Player avatar and economy state for the HUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec3,
    pub yaw: f64,
    pub health: f64,
    pub max_health: f64,
    pub energy: f64,
    pub max_energy: f64,
    pub points: u64,
    pub level: u32,
    pub current_weapon: usize,
    pub view_mode: ViewMode,
    /// Set once the player has died.
    pub game_over: Option<GameOverCause>,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            yaw: 0.0,
            health: 0.0,
            max_health: 0.0,
            energy: 0.0,
            max_energy: 0.0,
            points: 0,
            level: 1,
            current_weapon: 0,
            view_mode: ViewMode::default(),
            game_over: None,
        }
    }
}

/// Hotbar entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub name: String,
    pub tier: u32,
    pub points_required: u64,
    pub unlocked: bool,
    pub active: bool,
}

/// A wandering NPC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcView {
    pub id: u32,
    pub position: DVec3,
    pub yaw: f64,
    pub fleeing: bool,
}

/// A chef. Dead chefs stay in the list, flagged invisible, so the
/// presentation layer can keep its scene objects slot-stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChefView {
    pub id: u32,
    pub position: DVec3,
    pub yaw: f64,
    pub visible: bool,
    pub hits_taken: u32,
}

/// A live projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: DVec3,
}
