//! Static world configuration tables
//!
//! All tuning for planet populations, scoring, and spawn shells lives here.
//! Tables are read-only for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// Planet rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetCategory {
    Common,
    Exotic,
    Rare,
}

/// Immutable per-category tuning
#[derive(Debug, Clone)]
pub struct CategoryConfig {
    /// Desired live count, maintained by the registry
    pub target_population: usize,
    /// Inclusive score range, sampled once at planet creation
    pub point_range: (u32, u32),
    /// Bounding-sphere radius range (world units)
    pub size_range: (f32, f32),
    /// Distance-from-origin shell the planet spawns inside
    pub spawn_distance_range: (f32, f32),
    /// Candidate colors (0xRRGGBB)
    pub palette: &'static [u32],
}

const COMMON: CategoryConfig = CategoryConfig {
    target_population: 40,
    point_range: (10, 20),
    size_range: (2.0, 5.0),
    spawn_distance_range: (60.0, 220.0),
    palette: &[0x8d6e63, 0xa1887f, 0x90a4ae, 0x78909c, 0xbcaaa4],
};

const EXOTIC: CategoryConfig = CategoryConfig {
    target_population: 40,
    point_range: (25, 50),
    size_range: (1.5, 4.0),
    spawn_distance_range: (80.0, 230.0),
    palette: &[0x26c6da, 0x66bb6a, 0xffa726, 0xec407a],
};

const RARE: CategoryConfig = CategoryConfig {
    target_population: 20,
    point_range: (75, 150),
    size_range: (1.0, 3.0),
    spawn_distance_range: (100.0, 240.0),
    palette: &[0xab47bc, 0x7e57c2, 0xffd54f],
};

impl PlanetCategory {
    /// Fixed maintenance order: deficits fill Common first, then Exotic, then Rare
    pub const ALL: [PlanetCategory; 3] = [Self::Common, Self::Exotic, Self::Rare];

    /// Static tuning table for this category
    pub fn config(self) -> &'static CategoryConfig {
        match self {
            Self::Common => &COMMON,
            Self::Exotic => &EXOTIC,
            Self::Rare => &RARE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Exotic => "Exotic",
            Self::Rare => "Rare",
        }
    }
}

/// Total target population across all categories (100 in the reference config)
pub fn total_target_population() -> usize {
    PlanetCategory::ALL
        .iter()
        .map(|c| c.config().target_population)
        .sum()
}
