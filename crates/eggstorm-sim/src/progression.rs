//! Player economy and weapon progression — engine-owned state.
//!
//! Stored on `SimulationEngine` directly, NOT as ECS components; only the
//! avatar's spatial state lives in the world.

use eggstorm_core::config::{Tuning, WeaponSpec};
use eggstorm_core::enums::{GameOverCause, ViewMode};
use eggstorm_core::events::GameEvent;
use eggstorm_core::types::Deadline;

/// Runtime state of one catalog slot. `unlocked` never reverts.
#[derive(Debug, Clone)]
pub struct WeaponState {
    pub spec: WeaponSpec,
    pub unlocked: bool,
}

/// Health, energy, earned points, and weapon progression.
///
/// Invariants: `0 <= health <= max_health`; `energy >= 0` (it may exceed
/// `max_energy` through the shop bonus); `points` is monotone
/// non-decreasing; death happens exactly once.
#[derive(Debug, Clone)]
pub struct PlayerEconomy {
    pub health: f64,
    pub max_health: f64,
    pub energy: f64,
    pub max_energy: f64,
    /// Earned points (EP), the progression currency.
    pub points: u64,
    pub level: u32,
    pub weapons: Vec<WeaponState>,
    pub current_weapon: usize,
    pub view_mode: ViewMode,
    /// Earliest time the current automatic weapon may fire again.
    pub next_auto_shot_at: Deadline,
    /// Next energy drain sample.
    pub energy_sample_due: Deadline,
    /// Elapsed-secs mark the starvation drain is prorated from.
    pub health_drain_mark: f64,
    /// Set exactly once, when health first reaches zero.
    pub game_over: Option<GameOverCause>,
}

impl PlayerEconomy {
    pub fn new(tuning: &Tuning) -> Self {
        let weapons = tuning
            .weapons
            .iter()
            .map(|spec| WeaponState {
                unlocked: spec.points_required == 0,
                spec: spec.clone(),
            })
            .collect();
        Self {
            health: tuning.player.max_health,
            max_health: tuning.player.max_health,
            energy: tuning.player.max_energy,
            max_energy: tuning.player.max_energy,
            points: 0,
            level: 1,
            weapons,
            current_weapon: 0,
            view_mode: ViewMode::default(),
            next_auto_shot_at: Deadline::default(),
            energy_sample_due: Deadline::at(tuning.player.energy_drain_interval_secs),
            health_drain_mark: 0.0,
            game_over: None,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn current(&self) -> &WeaponState {
        &self.weapons[self.current_weapon]
    }

    pub fn award_points(&mut self, amount: u64) {
        self.points += amount;
    }

    /// Select a hotbar slot. Locked or out-of-range slots are a no-op.
    pub fn select_weapon(&mut self, slot: usize) {
        if self
            .weapons
            .get(slot)
            .is_some_and(|weapon| weapon.unlocked)
        {
            self.current_weapon = slot;
        }
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::FirstPerson => ViewMode::ThirdPerson,
            ViewMode::ThirdPerson => ViewMode::FirstPerson,
        };
    }

    /// Remove health, floored at zero. The caller decides whether a
    /// zero result is fatal via [`Self::kill`].
    pub fn apply_damage(&mut self, amount: f64) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Terminal transition, exactly once. Later calls are no-ops, so two
    /// causes racing in the same tick report only the first.
    pub fn kill(&mut self, cause: GameOverCause, events: &mut Vec<GameEvent>) {
        if self.game_over.is_none() {
            self.game_over = Some(cause);
            self.health = 0.0;
            events.push(GameEvent::GameOver { cause });
            tracing::info!(?cause, "player died");
        }
    }
}
