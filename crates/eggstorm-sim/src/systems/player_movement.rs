//! Player movement system.
//!
//! Combines discrete key intents with the analog vector, projects the
//! result onto the camera's horizontal basis, and integrates. Facing
//! always follows camera yaw — strafing does not rotate the avatar.

use hecs::World;

use eggstorm_core::components::{Heading, PlayerAvatar, Position};
use eggstorm_core::config::Tuning;
use eggstorm_core::input::TickInput;

use crate::progression::PlayerEconomy;

pub fn run(
    world: &mut World,
    economy: &PlayerEconomy,
    tuning: &Tuning,
    input: &TickInput,
    dt: f64,
) {
    let dead_zone = tuning.player.analog_dead_zone;

    // Discrete intents compose with the analog stick; stick up is
    // forward. Magnitude is irrelevant past this point — the combined
    // vector is normalized before speed is applied.
    let mut forward = (input.move_forward as i8 - input.move_backward as i8) as f64;
    let mut right = (input.move_right as i8 - input.move_left as i8) as f64;

    let analog_x = input.analog.x.clamp(-1.0, 1.0);
    let analog_y = input.analog.y.clamp(-1.0, 1.0);
    if analog_y.abs() > dead_zone {
        forward += -analog_y;
    }
    if analog_x.abs() > dead_zone {
        right += analog_x;
    }

    // Camera basis, horizontalized and zero-safe: motion stays in the
    // ground plane no matter how the camera pitches.
    let mut camera_forward = input.camera_forward;
    camera_forward.y = 0.0;
    let camera_forward = camera_forward.normalize_or_zero();

    let mut camera_right = input.camera_right;
    camera_right.y = 0.0;
    let camera_right = camera_right.normalize_or_zero();

    let wish = camera_forward * forward + camera_right * right;

    let speed = if economy.energy > 0.0 {
        tuning.player.walk_speed
    } else {
        tuning.player.exhausted_speed
    };

    let extent = tuning.world.extent;
    for (_entity, (_player, pos, heading)) in
        world.query_mut::<(&PlayerAvatar, &mut Position, &mut Heading)>()
    {
        if wish.length_squared() > 0.0 {
            let dir = wish.normalize();
            pos.0.x += dir.x * speed * dt;
            pos.0.z += dir.z * speed * dt;
        }

        heading.0 = input.camera_yaw;

        pos.0.x = pos.0.x.clamp(-extent, extent);
        pos.0.z = pos.0.z.clamp(-extent, extent);
    }
}
