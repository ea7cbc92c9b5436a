//! Normalized per-tick input sampled by the host.
//!
//! The core never sees raw device events: the host composes keyboard,
//! mouse, and touch state into one `TickInput` per frame. Malformed
//! values are clamped by the engine rather than rejected.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Everything the simulation needs from the player for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    // Discrete movement intents.
    pub move_forward: bool,
    pub move_backward: bool,
    pub move_left: bool,
    pub move_right: bool,

    /// Analog movement vector, components in [-1, 1]; +y is "stick down"
    /// (pushed away = forward), matching the on-screen joystick.
    pub analog: DVec2,

    /// Camera pose. Forward may pitch; movement uses only its horizontal
    /// part, aiming uses all of it.
    pub camera_forward: DVec3,
    pub camera_right: DVec3,
    pub camera_yaw: f64,

    /// Fire intent. Manual weapons trigger on the rising edge; automatic
    /// weapons fire while held.
    pub fire: bool,

    /// Toggle first/third person this tick.
    pub toggle_view: bool,

    /// Hotbar selection; locked or out-of-range slots are ignored.
    pub weapon_select: Option<usize>,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            move_forward: false,
            move_backward: false,
            move_left: false,
            move_right: false,
            analog: DVec2::ZERO,
            camera_forward: DVec3::new(0.0, 0.0, -1.0),
            camera_right: DVec3::new(1.0, 0.0, 0.0),
            camera_yaw: 0.0,
            fire: false,
            toggle_view: false,
            weapon_select: None,
        }
    }
}

impl TickInput {
    /// Whether any movement intent is present: a key held, or the analog
    /// stick pushed past the dead zone.
    pub fn has_move_intent(&self, dead_zone: f64) -> bool {
        self.move_forward
            || self.move_backward
            || self.move_left
            || self.move_right
            || self.analog.x.abs() > dead_zone
            || self.analog.y.abs() > dead_zone
    }
}
