//! Live planet collection
//!
//! Owns every planet in the world, partitioned logically by category.
//! Population drifts toward the per-category targets through rate-limited
//! maintenance passes. Planets are stored in creation order (ids are
//! monotonic), so FIFO eviction of excess falls out of the vector ordering.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::{PlanetCategory, total_target_population};
use super::ray::{Ray, ray_sphere_intersection};
use crate::consts::MAINTENANCE_BATCH;

/// Unique planet identity; never reused within a session
pub type PlanetId = u32;

/// One collectible planet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub category: PlanetCategory,
    /// Score value, drawn once at creation and fixed thereafter
    pub points: u32,
    pub position: Vec3,
    /// Bounding-sphere radius for laser collision
    pub size: f32,
    /// 0xRRGGBB, drawn from the category palette
    pub color: u32,
    /// Cosmetic spin axis, consumed only by the visual collaborator
    pub rotation_axis: Vec3,
    /// Cosmetic spin rate (radians per second)
    pub rotation_speed: f32,
}

/// Planets created and removed by one maintenance pass
#[derive(Debug, Clone, Default)]
pub struct MaintenanceReport {
    pub spawned: Vec<Planet>,
    pub despawned: Vec<PlanetId>,
}

/// The set of all live planets plus the session RNG that populates them
pub struct EntityRegistry {
    /// Live planets in creation order
    planets: Vec<Planet>,
    next_id: PlanetId,
    rng: Pcg32,
}

impl EntityRegistry {
    pub fn new(seed: u64) -> Self {
        Self {
            planets: Vec::with_capacity(total_target_population()),
            next_id: 1,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Fill every category straight to target, bypassing the per-tick batch
    /// limit. Used at session start and on restart.
    pub fn seed_full(&mut self) -> Vec<Planet> {
        let mut spawned = Vec::new();
        for category in PlanetCategory::ALL {
            while let Some(planet) = self.spawn(category) {
                spawned.push(planet);
            }
        }
        log::debug!("registry seeded with {} planets", self.total());
        spawned
    }

    /// Create one planet if the category still has a deficit. Refused
    /// (returns `None`) when the category is already at target.
    pub fn spawn(&mut self, category: PlanetCategory) -> Option<Planet> {
        let cfg = category.config();
        if self.count(category) >= cfg.target_population {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        let position = self.sample_shell_position(cfg.spawn_distance_range);
        let rotation_axis = self.sample_unit_vector();
        let planet = Planet {
            id,
            category,
            points: self.rng.random_range(cfg.point_range.0..=cfg.point_range.1),
            position,
            size: self.rng.random_range(cfg.size_range.0..=cfg.size_range.1),
            color: cfg.palette[self.rng.random_range(0..cfg.palette.len())],
            rotation_axis,
            rotation_speed: self.rng.random_range(0.1..=1.0),
        };
        self.planets.push(planet.clone());
        Some(planet)
    }

    /// Uniform point inside the spherical shell `[min, max]` distance from
    /// the world center
    fn sample_shell_position(&mut self, (min, max): (f32, f32)) -> Vec3 {
        let direction = self.sample_unit_vector();
        let distance = self.rng.random_range(min..=max);
        direction * distance
    }

    /// Uniform direction on the unit sphere
    fn sample_unit_vector(&mut self) -> Vec3 {
        let y: f32 = self.rng.random_range(-1.0..=1.0);
        let theta: f32 = self.rng.random_range(0.0..std::f32::consts::TAU);
        let r = (1.0 - y * y).sqrt();
        Vec3::new(r * theta.cos(), y, r * theta.sin())
    }

    /// Remove a planet by identity. Idempotent: `None` if already gone.
    pub fn despawn(&mut self, id: PlanetId) -> Option<Planet> {
        let idx = self.planets.iter().position(|p| p.id == id)?;
        Some(self.planets.remove(idx))
    }

    /// One rate-limited rebalancing pass: fill deficits in fixed category
    /// order, then evict the oldest planets of over-populated categories.
    /// At most `MAINTENANCE_BATCH` planets are created or removed per call,
    /// so the population invariant is an attractor, not instantaneous.
    pub fn maintain(&mut self) -> MaintenanceReport {
        let mut report = MaintenanceReport::default();
        let mut budget = MAINTENANCE_BATCH;

        for category in PlanetCategory::ALL {
            while budget > 0 {
                match self.spawn(category) {
                    Some(planet) => {
                        budget -= 1;
                        report.spawned.push(planet);
                    }
                    None => break,
                }
            }
        }

        while budget > 0 {
            let Some(id) = self.oldest_excess() else { break };
            if self.despawn(id).is_some() {
                report.despawned.push(id);
                budget -= 1;
            }
        }

        report
    }

    /// Earliest-created planet whose category is above target
    fn oldest_excess(&self) -> Option<PlanetId> {
        self.planets
            .iter()
            .find(|p| self.count(p.category) > p.category.config().target_population)
            .map(|p| p.id)
    }

    pub fn count(&self, category: PlanetCategory) -> usize {
        self.planets.iter().filter(|p| p.category == category).count()
    }

    pub fn total(&self) -> usize {
        self.planets.len()
    }

    pub fn all(&self) -> &[Planet] {
        &self.planets
    }

    pub fn by_category(&self, category: PlanetCategory) -> impl Iterator<Item = &Planet> {
        self.planets.iter().filter(move |p| p.category == category)
    }

    pub fn get(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    /// Closest planet whose bounding sphere the ray pierces, or `None`.
    /// Ties break to the first-created planet at equal distance.
    pub fn nearest_along_ray(&self, ray: &Ray) -> Option<PlanetId> {
        let mut best: Option<(PlanetId, f32)> = None;
        for planet in &self.planets {
            if let Some(t) = ray_sphere_intersection(ray, planet.position, planet.size) {
                match best {
                    Some((_, best_t)) if best_t <= t => {}
                    _ => best = Some((planet.id, t)),
                }
            }
        }
        best.map(|(id, _)| id)
    }

    /// Insert a pre-built planet, bypassing population checks
    #[cfg(test)]
    pub fn insert_raw(&mut self, category: PlanetCategory, points: u32, position: Vec3, size: f32) -> PlanetId {
        let id = self.next_id;
        self.next_id += 1;
        self.planets.push(Planet {
            id,
            category,
            points,
            position,
            size,
            color: category.config().palette[0],
            rotation_axis: Vec3::Y,
            rotation_speed: 0.5,
        });
        id
    }
}
