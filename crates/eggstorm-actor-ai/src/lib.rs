//! Behavior state machines for EGGSTORM actors.
//!
//! Pure functions that compute mode transitions and headings for NPCs
//! and chefs based on their current state and situation. No ECS
//! dependency — operates on plain data.

pub mod fsm;

#[cfg(test)]
mod tests;
