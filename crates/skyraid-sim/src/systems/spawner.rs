//! Spawn slot selection and enemy depth placement.

use rand::Rng;

use skyraid_core::components::SpawnSlot;
use skyraid_core::config::FlightConfig;

/// Picks enemy slots from a fixed grid, avoiding the same slot twice in a row.
#[derive(Debug, Clone)]
pub struct SpawnSelector {
    slots: Vec<SpawnSlot>,
    last_index: Option<usize>,
    retry_budget: u32,
}

impl SpawnSelector {
    /// Row-major grid: one row per `rows` entry (y), one column per `columns` entry (x).
    pub fn from_grid(columns: &[f64], rows: &[f64], retry_budget: u32) -> Self {
        let slots = rows
            .iter()
            .flat_map(|&y| columns.iter().map(move |&x| (x, y)))
            .enumerate()
            .map(|(index, (x, y))| SpawnSlot { index, x, y })
            .collect();
        Self {
            slots,
            last_index: None,
            retry_budget,
        }
    }

    pub fn from_config(config: &FlightConfig) -> Self {
        Self::from_grid(&config.spawn_columns, &config.spawn_rows, config.spawn_retry_budget)
    }

    pub fn slots(&self) -> &[SpawnSlot] {
        &self.slots
    }

    /// Draw a slot uniformly, re-rolling while it matches the previous pick.
    ///
    /// After `retry_budget` re-rolls the repeat is accepted. With a single
    /// slot the repeat is unavoidable. Returns `None` for an empty grid.
    pub fn next_slot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SpawnSlot> {
        if self.slots.is_empty() {
            return None;
        }

        let mut index = rng.gen_range(0..self.slots.len());
        if self.slots.len() > 1 {
            let mut retries = 0;
            while Some(index) == self.last_index && retries < self.retry_budget {
                index = rng.gen_range(0..self.slots.len());
                retries += 1;
            }
        }

        self.last_index = Some(index);
        Some(self.slots[index])
    }
}

/// Depth (distance ahead along -Z) of the enemy with the given spawn ordinal.
pub fn enemy_depth(ordinal: u32, config: &FlightConfig) -> f64 {
    (ordinal as f64 + 1.0) * config.enemy_spacing + config.enemy_start_offset
}
