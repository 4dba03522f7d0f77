//! Aim ray and ray-sphere intersection
//!
//! One ray type serves both pointer targeting and laser collision. Planets
//! collide as bounding spheres (radius = planet size); there is no general
//! rigid-body physics.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Minimum accepted hit distance; rejects degenerate hits at the ray origin
const MIN_HIT_DISTANCE: f32 = 1e-4;

/// An origin/direction pair (direction normalized on construction)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parametric distance `t` along the ray
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Distance along `ray` to the nearest positive intersection with a sphere,
/// or `None` on a miss. A ray starting inside the sphere reports the exit
/// distance so a point-blank target still counts as hit.
pub fn ray_sphere_intersection(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    let sqrt_disc = disc.sqrt();
    let near = -b - sqrt_disc;
    if near > MIN_HIT_DISTANCE {
        return Some(near);
    }
    let far = -b + sqrt_disc;
    if far > MIN_HIT_DISTANCE {
        return Some(far);
    }
    None
}
