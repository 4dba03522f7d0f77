//! Planet Strike - a first-person shoot-the-planets arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (avatar, camera, laser, planet registry, match clock)
//!
//! Rendering, DOM/UI, and raw input binding live in the host shell. The core
//! consumes a normalized control snapshot plus a pointer aim direction each
//! tick, and emits abstract events (spawn, destroy, score, game over) the
//! shell turns into visuals.

pub mod sim;

pub use sim::{ControlState, GameSession, TickInput, TickResult};

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Half extent of the playable cube; avatar position clamps to ±this on every axis
    pub const WORLD_HALF_SIZE: f32 = 250.0;

    /// Avatar movement speed (world units per second)
    pub const MOVEMENT_SPEED: f32 = 60.0;
    /// Avatar yaw rate (radians per second)
    pub const ROTATION_SPEED: f32 = 1.8;
    /// Laser ray origin relative to avatar position
    pub const HEAD_OFFSET: Vec3 = Vec3::new(0.0, 2.0, 0.0);

    /// Maximum continuous laser burn (seconds)
    pub const LASER_MAX_DURATION: f32 = 5.0;
    /// Lockout after a full burn (seconds)
    pub const LASER_COOLDOWN: f32 = 0.5;

    /// Match length (seconds)
    pub const GAME_DURATION: f32 = 60.0;

    /// Max planets spawned or evicted per maintenance pass
    pub const MAINTENANCE_BATCH: usize = 5;

    /// Camera look-around bounds (radians)
    pub const CAMERA_MAX_YAW: f32 = 0.6;
    pub const CAMERA_MAX_PITCH: f32 = 0.35;
    /// Look-around rate while a look key is held (radians per second)
    pub const CAMERA_LOOK_SPEED: f32 = 1.2;
    /// Geometric return-to-center factor per tick once look keys release
    pub const CAMERA_RETURN_RATE: f32 = 0.08;
    /// Camera boom length behind the avatar
    pub const CAMERA_DISTANCE: f32 = 10.0;
    pub const CAMERA_BASE_HEIGHT: f32 = 3.0;
    /// Vertical boom offset per radian of pitch
    pub const CAMERA_PITCH_SCALE: f32 = 5.0;
    /// The camera aims at a point this far above the avatar
    pub const CAMERA_LOOK_AT_HEIGHT: f32 = 1.5;
}
