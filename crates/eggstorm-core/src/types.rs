//! Fundamental simulation types: time, deadlines, and yaw helpers.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Simulation time tracking. Advanced once per active tick by the
/// host-provided elapsed delta; this is the monotonic clock every
/// deadline in the simulation is compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each active tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Absolute sim-time deadline.
///
/// All per-entity timers (flee expiry, heading resample, attack and fire
/// cooldowns, chef respawn) are deadlines checked against [`SimTime`] on
/// the tick path, never suspended tasks — cancellation is implicit in
/// simply no longer checking. The default deadline is already due.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Deadline(f64);

impl Deadline {
    /// Deadline at an absolute elapsed-seconds value.
    pub fn at(elapsed_secs: f64) -> Self {
        Self(elapsed_secs)
    }

    /// Deadline `secs` seconds after `now`.
    pub fn after(now: SimTime, secs: f64) -> Self {
        Self(now.elapsed_secs + secs)
    }

    /// Whether the deadline has been reached.
    pub fn is_due(&self, now: SimTime) -> bool {
        now.elapsed_secs >= self.0
    }

    /// Seconds until the deadline, zero if already due.
    pub fn remaining(&self, now: SimTime) -> f64 {
        (self.0 - now.elapsed_secs).max(0.0)
    }
}

/// Unit direction in the horizontal plane for a yaw angle
/// (0 = +Z, increasing toward +X).
pub fn yaw_dir(yaw: f64) -> DVec3 {
    DVec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Yaw angle of a direction's horizontal component.
pub fn dir_yaw(dir: DVec3) -> f64 {
    dir.x.atan2(dir.z)
}

/// Distance between two points ignoring the vertical axis.
pub fn horizontal_distance(a: DVec3, b: DVec3) -> f64 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}
