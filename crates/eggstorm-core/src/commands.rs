//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, never
//! applied mid-tick.

use serde::{Deserialize, Serialize};

/// Session-level player actions. Per-frame control (movement, aim, fire)
/// travels in [`crate::input::TickInput`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the menu and start a fresh session.
    StartGame,
    /// Tear the world down and start over, from any phase.
    Restart,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
}
