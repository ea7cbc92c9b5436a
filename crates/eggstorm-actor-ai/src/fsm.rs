//! NPC and chef behavior evaluation.
//!
//! The NPC machine has two modes: Wander (heading resampled at random
//! intervals) and Flee (heading recomputed every tick as repulsion from
//! the player until the flee deadline passes). Chefs have a single mode,
//! constant pursuit. Everything here is per-tick and side-effect free
//! apart from drawing on the caller's RNG.

use glam::DVec3;
use rand::Rng;

use eggstorm_core::config::NpcTuning;
use eggstorm_core::enums::NpcMode;
use eggstorm_core::types::{dir_yaw, Deadline, SimTime};

/// Input to the NPC FSM for a single entity.
pub struct NpcContext {
    pub mode: NpcMode,
    /// Current facing/movement yaw.
    pub heading: f64,
    pub next_heading_change: Deadline,
    pub flee_until: Deadline,
    pub position: DVec3,
    pub player_position: DVec3,
    pub now: SimTime,
}

/// Output from the NPC FSM. The caller applies movement at the speed
/// matching the returned mode.
pub struct NpcUpdate {
    pub mode: NpcMode,
    pub heading: f64,
    pub next_heading_change: Deadline,
}

/// Evaluate one NPC for one tick.
pub fn evaluate_npc(ctx: &NpcContext, tuning: &NpcTuning, rng: &mut impl Rng) -> NpcUpdate {
    if ctx.mode == NpcMode::Flee && !ctx.flee_until.is_due(ctx.now) {
        // Repulsion: straight away from the player, horizontal only.
        // A degenerate offset (NPC exactly on top of the player) keeps
        // the previous heading.
        let mut away = ctx.position - ctx.player_position;
        away.y = 0.0;
        let heading = if away.length_squared() > 1e-12 {
            dir_yaw(away)
        } else {
            ctx.heading
        };
        return NpcUpdate {
            mode: NpcMode::Flee,
            heading,
            next_heading_change: ctx.next_heading_change,
        };
    }

    // Wander, or a flee that just expired: the latter reverts with a
    // freshly sampled heading rather than resuming the stale one.
    let expired_flee = ctx.mode == NpcMode::Flee;
    if expired_flee || ctx.next_heading_change.is_due(ctx.now) {
        let (heading, next_heading_change) = sample_wander(ctx.now, tuning, rng);
        return NpcUpdate {
            mode: NpcMode::Wander,
            heading,
            next_heading_change,
        };
    }

    NpcUpdate {
        mode: NpcMode::Wander,
        heading: ctx.heading,
        next_heading_change: ctx.next_heading_change,
    }
}

/// Draw a fresh wander heading and the deadline for the next resample.
pub fn sample_wander(
    now: SimTime,
    tuning: &NpcTuning,
    rng: &mut impl Rng,
) -> (f64, Deadline) {
    let heading = rng.gen_range(0.0..std::f64::consts::TAU);
    let interval =
        rng.gen_range(tuning.heading_change_min_secs..tuning.heading_change_max_secs);
    (heading, Deadline::after(now, interval))
}

/// Pursuit heading for a chef chasing the player. Falls back to the
/// current heading when the chef is already on top of the target.
pub fn chef_pursuit_heading(chef_position: DVec3, player_position: DVec3, current: f64) -> f64 {
    let mut to_player = player_position - chef_position;
    to_player.y = 0.0;
    if to_player.length_squared() > 1e-12 {
        dir_yaw(to_player)
    } else {
        current
    }
}
