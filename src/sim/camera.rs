//! Third-person camera rig
//!
//! The look-around offsets are the rig's only stored state; the world pose
//! is a pure function of avatar pose plus offsets, recomputed every tick.
//! Released offsets decay geometrically back to center without crossing zero.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::session::ControlState;
use crate::consts::{
    CAMERA_BASE_HEIGHT, CAMERA_DISTANCE, CAMERA_LOOK_AT_HEIGHT, CAMERA_LOOK_SPEED,
    CAMERA_MAX_PITCH, CAMERA_MAX_YAW, CAMERA_PITCH_SCALE, CAMERA_RETURN_RATE,
};

/// Derived camera placement for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Damped look-around offsets
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraRig {
    pub yaw_offset: f32,
    pub pitch_offset: f32,
}

impl CameraRig {
    /// Drive the offsets from look input. While held the offset ramps toward
    /// its hard bound; released, it decays toward zero each tick.
    pub fn update(&mut self, control: &ControlState, dt: f32) {
        let step = CAMERA_LOOK_SPEED * dt;

        if control.look_left {
            self.yaw_offset = (self.yaw_offset + step).min(CAMERA_MAX_YAW);
        } else if control.look_right {
            self.yaw_offset = (self.yaw_offset - step).max(-CAMERA_MAX_YAW);
        } else {
            self.yaw_offset *= 1.0 - CAMERA_RETURN_RATE;
        }

        if control.look_up {
            self.pitch_offset = (self.pitch_offset + step).min(CAMERA_MAX_PITCH);
        } else if control.look_down {
            self.pitch_offset = (self.pitch_offset - step).max(-CAMERA_MAX_PITCH);
        } else {
            self.pitch_offset *= 1.0 - CAMERA_RETURN_RATE;
        }
    }

    /// World pose: a boom behind the avatar, swung laterally by yaw offset
    /// and vertically by pitch offset, rotated into the avatar's frame.
    pub fn pose(&self, avatar: &Avatar) -> CameraPose {
        let boom = Vec3::new(
            self.yaw_offset.sin() * CAMERA_DISTANCE,
            CAMERA_BASE_HEIGHT + self.pitch_offset * CAMERA_PITCH_SCALE,
            self.yaw_offset.cos() * CAMERA_DISTANCE,
        );
        CameraPose {
            position: avatar.position + Quat::from_rotation_y(avatar.yaw) * boom,
            look_at: avatar.position + Vec3::Y * CAMERA_LOOK_AT_HEIGHT,
        }
    }
}
