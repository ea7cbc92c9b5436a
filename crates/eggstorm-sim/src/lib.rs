//! Simulation engine for EGGSTORM.
//!
//! Owns the hecs ECS world, advances all systems once per host frame
//! given an elapsed-time delta, and produces GameStateSnapshots for the
//! presentation layer. Completely headless, enabling deterministic
//! testing.

pub mod engine;
pub mod progression;
pub mod systems;
pub mod world_setup;

pub use eggstorm_core as core;
pub use engine::SimulationEngine;
