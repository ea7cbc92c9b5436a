//! Host-loop harness for the EGGSTORM simulation.
//!
//! Runs the engine on a dedicated thread at a fixed cadence. The
//! presentation/input layer writes the latest `TickInput` and reads the
//! latest snapshot through shared state; session commands arrive over a
//! channel and are queued into the engine, so every external mutation
//! lands on a tick boundary.

pub mod game_loop;
pub mod state;
