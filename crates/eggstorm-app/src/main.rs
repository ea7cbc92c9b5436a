//! Headless demo host: boots the game loop, scripts a few seconds of
//! play, and logs the resulting HUD state.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use eggstorm_core::commands::PlayerCommand;
use eggstorm_core::config::SimConfig;
use eggstorm_core::input::TickInput;

use eggstorm_app::game_loop::spawn_game_loop;
use eggstorm_app::state::{GameLoopCommand, SharedInput, SharedSnapshot};

fn main() {
    tracing_subscriber::fmt::init();

    let shared_input: SharedInput = Arc::new(Mutex::new(TickInput::default()));
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));

    let tx = spawn_game_loop(
        SimConfig::default(),
        Arc::clone(&shared_input),
        Arc::clone(&latest_snapshot),
    );
    let _ = tx.send(GameLoopCommand::Player(PlayerCommand::StartGame));

    // Walk forward and hold fire for a few seconds.
    if let Ok(mut input) = shared_input.lock() {
        input.move_forward = true;
        input.fire = true;
    }
    std::thread::sleep(Duration::from_secs(3));

    if let Some(snapshot) = latest_snapshot.lock().ok().and_then(|s| s.clone()) {
        tracing::info!(
            tick = snapshot.time.tick,
            health = snapshot.player.health,
            energy = snapshot.player.energy,
            points = snapshot.player.points,
            projectiles = snapshot.projectiles.len(),
            "demo session state"
        );
    }

    let _ = tx.send(GameLoopCommand::Shutdown);
}
