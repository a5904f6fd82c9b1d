//! Box-building city layout with footprint rejection sampling and stacking.

use glam::DVec3;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityConfig {
    /// Buildings are scattered over `[-half_extent, half_extent]` on X and Z.
    pub half_extent: f64,
    pub building_count: usize,
    /// Placement attempts before an overlapping spot is accepted.
    pub placement_attempts: u32,
    /// Chance that a building tries to sit on top of an existing one.
    pub stack_chance: f64,
    /// Random bases inspected when stacking.
    pub stack_attempts: u32,
}

impl CityConfig {
    /// `stack_chance` as a valid probability. Non-finite values disable stacking.
    pub fn stack_probability(&self) -> f64 {
        if self.stack_chance.is_finite() {
            self.stack_chance.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            half_extent: 350.0,
            building_count: 50,
            placement_attempts: 20,
            stack_chance: 0.3,
            stack_attempts: 10,
        }
    }
}

/// One box building. `position` is the box centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub position: DVec3,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Grey level in [0, 1] (HSL lightness, zero saturation).
    pub lightness: f64,
    /// Index of the building this one stands on, if stacked.
    pub stacked_on: Option<usize>,
}

impl Building {
    /// Y coordinate of the roof.
    pub fn top(&self) -> f64 {
        self.position.y + self.height / 2.0
    }

    /// Whether the ground footprints of two buildings overlap.
    pub fn footprint_overlaps(&self, other: &Building) -> bool {
        footprints_overlap(
            self.position.x,
            self.position.z,
            self.width,
            self.depth,
            other,
        )
    }

    /// Whether this footprint fits within `base`'s footprint dimensions.
    pub fn fits_on(&self, base: &Building) -> bool {
        self.width <= base.width && self.depth <= base.depth
    }
}

fn footprints_overlap(x: f64, z: f64, width: f64, depth: f64, other: &Building) -> bool {
    (x - other.position.x).abs() < (width + other.width) / 2.0
        && (z - other.position.z).abs() < (depth + other.depth) / 2.0
}

/// Lay out a city. Deterministic for a given RNG state.
pub fn generate_city<R: Rng + ?Sized>(rng: &mut R, config: &CityConfig) -> Vec<Building> {
    let mut buildings: Vec<Building> = Vec::with_capacity(config.building_count);

    for _ in 0..config.building_count {
        let width = (rng.gen::<f64>() * 0.8 + 0.4) * 50.0;
        let depth = (rng.gen::<f64>() * 0.8 + 0.3) * 50.0;
        let height = rng.gen::<f64>() * 35.0 + 15.0;
        let lightness = rng.gen::<f64>() * 0.5 + 0.2;

        let (x, z) = find_ground_spot(rng, config, width, depth, &buildings);
        let mut building = Building {
            position: DVec3::new(x, height / 2.0, z),
            width,
            depth,
            height,
            lightness,
            stacked_on: None,
        };

        if !buildings.is_empty() && rng.gen_bool(config.stack_probability()) {
            if let Some(base_index) = find_base(rng, config, &building, &buildings) {
                let base = &buildings[base_index];
                building.position = DVec3::new(
                    base.position.x,
                    base.top() + height / 2.0,
                    base.position.z,
                );
                building.stacked_on = Some(base_index);
            }
        }

        buildings.push(building);
    }

    debug!(
        "generated {} buildings ({} stacked)",
        buildings.len(),
        buildings.iter().filter(|b| b.stacked_on.is_some()).count()
    );
    buildings
}

/// Rejection-sample a ground position; keeps the last candidate if every attempt overlaps.
fn find_ground_spot<R: Rng + ?Sized>(
    rng: &mut R,
    config: &CityConfig,
    width: f64,
    depth: f64,
    existing: &[Building],
) -> (f64, f64) {
    let mut candidate = (0.0, 0.0);
    for _ in 0..config.placement_attempts.max(1) {
        let x = (rng.gen::<f64>() - 0.5) * config.half_extent * 2.0;
        let z = (rng.gen::<f64>() - 0.5) * config.half_extent * 2.0;
        candidate = (x, z);
        if !existing
            .iter()
            .any(|other| footprints_overlap(x, z, width, depth, other))
        {
            break;
        }
    }
    candidate
}

/// Pick a random existing building large enough to carry `building`.
fn find_base<R: Rng + ?Sized>(
    rng: &mut R,
    config: &CityConfig,
    building: &Building,
    existing: &[Building],
) -> Option<usize> {
    (0..config.stack_attempts)
        .map(|_| rng.gen_range(0..existing.len()))
        .find(|&i| building.fits_on(&existing[i]))
}
