//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Terminal: the player died. Ticks keep serving the frozen snapshot.
    GameOver,
}

/// Camera attachment mode, toggled by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    FirstPerson,
    ThirdPerson,
}

/// NPC behavior mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NpcMode {
    /// Random walking: heading resampled at random intervals.
    #[default]
    Wander,
    /// Running directly away from the player after being hit.
    Flee,
}

/// What killed the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOverCause {
    /// Starvation: health drained away while energy was empty.
    Energy,
    /// Beaten down by chef melee attacks.
    Chef,
}

/// How a weapon fires. The cooldown only exists for automatic weapons,
/// so it lives on the variant rather than as an optional field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum FiringMode {
    /// One shot per fire-intent edge; cadence is the caller's problem.
    Manual,
    /// Fires while intent is held, gated by a minimum inter-shot interval.
    Automatic { cooldown_secs: f64 },
}
