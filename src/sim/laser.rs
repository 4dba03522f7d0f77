//! Laser fire/hold/cooldown state machine
//!
//! The beam tracks the live aim every tick while firing and destroys at most
//! one planet per tick (nearest hit only). A full burn pays a cooldown; an
//! explicit release snaps straight back to `Idle` with no cooldown. The
//! asymmetry is intentional: quick taps stay penalty-free, only an exhausted
//! burn locks out. See the quick-tap test scenario below.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::config::PlanetCategory;
use super::ray::Ray;
use super::registry::{EntityRegistry, PlanetId};
use crate::consts::{LASER_COOLDOWN, LASER_MAX_DURATION};

/// Beam lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LaserState {
    Idle,
    /// Burning; seconds elapsed since trigger
    Firing { elapsed: f32 },
    /// Post-burn lockout; no trigger accepted and no collision tested
    Cooldown { remaining: f32 },
}

/// A planet destroyed by the beam this tick. Position/color/size feed the
/// destruction effect in the visual layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserHit {
    pub id: PlanetId,
    pub category: PlanetCategory,
    pub points: u32,
    pub position: Vec3,
    pub color: u32,
    pub size: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Laser {
    state: LaserState,
    /// Current beam ray while firing, for beam rendering
    ray: Option<Ray>,
}

impl Default for Laser {
    fn default() -> Self {
        Self {
            state: LaserState::Idle,
            ray: None,
        }
    }
}

impl Laser {
    pub fn state(&self) -> LaserState {
        self.state
    }

    pub fn ray(&self) -> Option<Ray> {
        self.ray
    }

    /// Trigger the beam. Accepted only from `Idle`; a trigger during a burn
    /// or cooldown is rejected and leaves the state unchanged.
    pub fn try_fire(&mut self) -> bool {
        if self.state == LaserState::Idle {
            self.state = LaserState::Firing { elapsed: 0.0 };
            true
        } else {
            false
        }
    }

    /// Explicit release: cancels an active burn immediately, bypassing the
    /// cooldown a full burn would incur. No effect in `Idle` or `Cooldown`.
    pub fn release(&mut self) {
        if matches!(self.state, LaserState::Firing { .. }) {
            self.state = LaserState::Idle;
            self.ray = None;
        }
    }

    /// Force back to `Idle`, discarding any burn or cooldown. Used when the
    /// match ends or restarts.
    pub fn reset(&mut self) {
        self.state = LaserState::Idle;
        self.ray = None;
    }

    /// Advance one tick. While firing, the ray is rebuilt from the live head
    /// position and aim direction (the beam follows the pointer mid-burn),
    /// then the nearest planet along it is destroyed and reported.
    pub fn update(
        &mut self,
        head: Vec3,
        aim_direction: Vec3,
        registry: &mut EntityRegistry,
        dt: f32,
    ) -> Option<LaserHit> {
        match self.state {
            LaserState::Idle => None,
            LaserState::Firing { elapsed } => {
                let ray = Ray::new(head, aim_direction);
                self.ray = Some(ray);

                let hit = registry
                    .nearest_along_ray(&ray)
                    .and_then(|id| registry.despawn(id))
                    .map(|planet| LaserHit {
                        id: planet.id,
                        category: planet.category,
                        points: planet.points,
                        position: planet.position,
                        color: planet.color,
                        size: planet.size,
                    });

                let elapsed = elapsed + dt;
                if elapsed >= LASER_MAX_DURATION {
                    // Burn exhausted: tear down the beam, start the lockout
                    self.state = LaserState::Cooldown {
                        remaining: LASER_COOLDOWN,
                    };
                    self.ray = None;
                } else {
                    self.state = LaserState::Firing { elapsed };
                }

                hit
            }
            LaserState::Cooldown { remaining } => {
                let remaining = remaining - dt;
                self.state = if remaining > 0.0 {
                    LaserState::Cooldown { remaining }
                } else {
                    LaserState::Idle
                };
                None
            }
        }
    }
}
