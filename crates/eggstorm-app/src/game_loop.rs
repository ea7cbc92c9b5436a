//! Game loop thread — runs the simulation engine at 60 Hz.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest input is
//! sampled from shared state once per tick, and the resulting snapshot
//! is stored back for the host to poll. No lock is held across a tick.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use eggstorm_core::config::SimConfig;
use eggstorm_core::input::TickInput;
use eggstorm_sim::engine::SimulationEngine;

use crate::state::{GameLoopCommand, SharedInput, SharedSnapshot};

/// Simulation cadence (Hz).
pub const TICK_RATE: u32 = 60;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    config: SimConfig,
    shared_input: SharedInput,
    latest_snapshot: SharedSnapshot,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("eggstorm-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &shared_input, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    shared_input: &SharedInput,
    latest_snapshot: &SharedSnapshot,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut last_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Sample the host's latest input
        let input = shared_input
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|_| TickInput::default());

        // 3. Advance one tick by the real elapsed time
        let now = Instant::now();
        let dt = now.duration_since(last_tick_time).as_secs_f64();
        last_tick_time = now;
        let snapshot = engine.tick(dt, &input);

        // 4. Publish the snapshot for the host
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eggstorm_core::commands::PlayerCommand;
    use eggstorm_core::enums::GamePhase;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_publishes_snapshots() {
        let shared_input: SharedInput = Arc::new(Mutex::new(TickInput::default()));
        let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));

        let tx = spawn_game_loop(
            SimConfig::default(),
            Arc::clone(&shared_input),
            Arc::clone(&latest_snapshot),
        );
        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();

        // Give the loop a few ticks to come up.
        std::thread::sleep(Duration::from_millis(200));

        let snapshot = latest_snapshot
            .lock()
            .unwrap()
            .clone()
            .expect("loop should have published a snapshot");
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert_eq!(snapshot.npcs.len(), 10);
        assert_eq!(snapshot.chefs.len(), 1);
        assert!(snapshot.time.tick > 0);

        // Snapshots must serialize cleanly for any remote host.
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.is_empty());

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_movement_input_reaches_engine() {
        let shared_input: SharedInput = Arc::new(Mutex::new(TickInput::default()));
        let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));

        let tx = spawn_game_loop(
            SimConfig::default(),
            Arc::clone(&shared_input),
            Arc::clone(&latest_snapshot),
        );
        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();

        shared_input.lock().unwrap().move_forward = true;
        std::thread::sleep(Duration::from_millis(300));

        let snapshot = latest_snapshot.lock().unwrap().clone().unwrap();
        assert!(
            snapshot.player.position.z < -0.1,
            "player should have walked forward, z = {}",
            snapshot.player.position.z
        );

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
