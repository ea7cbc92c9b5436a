//! Shared state between the host thread and the game loop thread.

use std::sync::{Arc, Mutex};

use eggstorm_core::commands::PlayerCommand;
use eggstorm_core::input::TickInput;
use eggstorm_core::state::GameStateSnapshot;

/// Commands accepted by the game loop thread.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    /// Forwarded to the engine's command queue.
    Player(PlayerCommand),
    /// Stop the loop and exit the thread.
    Shutdown,
}

/// Input state written by the host, sampled by the loop once per tick.
pub type SharedInput = Arc<Mutex<TickInput>>;

/// Latest snapshot published by the loop for the host to render.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;
