//! Game-state core
//!
//! Everything that advances the match lives here: avatar pose, camera rig,
//! laser lifecycle, the planet registry, and the countdown clock. The whole
//! module is plain sequential code driven at a fixed 60 Hz step - a seeded
//! RNG and creation-ordered entity storage make a session fully reproducible
//! from its seed. Nothing in here touches rendering, the DOM, or raw input.

pub mod avatar;
pub mod camera;
pub mod clock;
pub mod config;
pub mod laser;
pub mod ray;
pub mod registry;
pub mod session;

pub use avatar::Avatar;
pub use camera::{CameraPose, CameraRig};
pub use clock::{MatchClock, MatchPhase};
pub use config::{CategoryConfig, PlanetCategory};
pub use laser::{Laser, LaserHit, LaserState};
pub use ray::{Ray, ray_sphere_intersection};
pub use registry::{EntityRegistry, MaintenanceReport, Planet, PlanetId};
pub use session::{ControlState, GameSession, TickInput, TickResult};
