//! Avatar pose integration
//!
//! Pure state transform: deterministic given the control snapshot, no error
//! conditions. Yaw is the avatar's only rotation; vertical movement rides
//! the world axis, not the facing direction.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::session::ControlState;
use crate::consts::{HEAD_OFFSET, MOVEMENT_SPEED, ROTATION_SPEED, WORLD_HALF_SIZE};

/// The player-controlled entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Avatar {
    /// Clamped into the closed world cube every tick
    pub position: Vec3,
    /// Rotation about the vertical axis (radians)
    pub yaw: f32,
}

impl Avatar {
    /// Facing direction in the horizontal plane (-Z rotated by yaw)
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Laser ray origin
    pub fn head_position(&self) -> Vec3 {
        self.position + HEAD_OFFSET
    }

    /// Integrate one tick of movement input, then clamp into the world cube.
    /// Conflicting inputs cancel through the additive update.
    pub fn update(&mut self, control: &ControlState, dt: f32) {
        if control.rotate_left {
            self.yaw += ROTATION_SPEED * dt;
        }
        if control.rotate_right {
            self.yaw -= ROTATION_SPEED * dt;
        }

        let step = MOVEMENT_SPEED * dt;
        let forward = self.forward();
        if control.forward {
            self.position += forward * step;
        }
        if control.backward {
            self.position -= forward * step;
        }
        if control.up {
            self.position.y += step;
        }
        if control.down {
            self.position.y -= step;
        }

        self.position = self.position.clamp(
            Vec3::splat(-WORLD_HALF_SIZE),
            Vec3::splat(WORLD_HALF_SIZE),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use proptest::prelude::*;

    fn in_bounds(avatar: &Avatar) -> bool {
        avatar.position.abs().max_element() <= WORLD_HALF_SIZE
    }

    #[test]
    fn test_forward_moves_along_facing() {
        let mut avatar = Avatar::default();
        let control = ControlState {
            forward: true,
            ..Default::default()
        };
        avatar.update(&control, SIM_DT);
        // Default facing is -Z
        assert!(avatar.position.z < 0.0);
        assert_eq!(avatar.position.x, 0.0);
        assert_eq!(avatar.position.y, 0.0);
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut avatar = Avatar::default();
        let control = ControlState {
            rotate_left: true,
            ..Default::default()
        };
        for _ in 0..10 {
            avatar.update(&control, SIM_DT);
        }
        assert!((avatar.yaw - 10.0 * ROTATION_SPEED * SIM_DT).abs() < 1e-5);
    }

    #[test]
    fn test_opposite_inputs_cancel() {
        let mut avatar = Avatar::default();
        let control = ControlState {
            forward: true,
            backward: true,
            up: true,
            down: true,
            rotate_left: true,
            rotate_right: true,
            ..Default::default()
        };
        avatar.update(&control, SIM_DT);
        assert_eq!(avatar.position, Vec3::ZERO);
        assert_eq!(avatar.yaw, 0.0);
    }

    #[test]
    fn test_clamped_at_cube_face() {
        let mut avatar = Avatar::default();
        let control = ControlState {
            up: true,
            ..Default::default()
        };
        // Far more ticks than needed to reach the ceiling
        for _ in 0..100_000 {
            avatar.update(&control, SIM_DT);
        }
        assert_eq!(avatar.position.y, WORLD_HALF_SIZE);
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_bounds(steps in proptest::collection::vec(any::<u8>(), 1..500)) {
            let mut avatar = Avatar::default();
            for bits in steps {
                let control = ControlState {
                    forward: bits & 1 != 0,
                    backward: bits & 2 != 0,
                    rotate_left: bits & 4 != 0,
                    rotate_right: bits & 8 != 0,
                    up: bits & 16 != 0,
                    down: bits & 32 != 0,
                    ..Default::default()
                };
                avatar.update(&control, SIM_DT);
                prop_assert!(in_bounds(&avatar));
            }
        }
    }
}
