/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as the grid growth schedule,
/// coin density, and the cosmetic delay before advancing to the next level.
use serde::{Deserialize, Serialize};

/// Side length (in cells) of the level 1 maze.
pub const BASE_GRID_SIZE: usize = 15;

/// The grid grows once every this many levels.
pub const LEVELS_PER_GROWTH: u32 = 2;

/// Number of rows/columns added at each growth step.
pub const GROWTH_STEP: usize = 2;

/// Minimum number of coins targeted on a level.
pub const MIN_COINS: usize = 3;

/// Maximum number of coins placed on a level.
pub const MAX_COINS: usize = 12;

/// One extra base coin per this many cells.
pub const COIN_AREA_DIVISOR: usize = 40;

/// Coin sampling gives up after `rows * cols * COIN_RETRY_FACTOR` draws.
pub const COIN_RETRY_FACTOR: usize = 8;

/// Delay (in milliseconds) between reaching the exit and starting the next level.
pub const LEVEL_ADVANCE_DELAY_MS: u64 = 220;

/// Number of entries kept per level in the best-time table.
pub const BEST_TIMES_PER_LEVEL: usize = 5;

/// Tunable gameplay parameters carried by a session.
///
/// Defaults come from the constants above; a JSON file may override any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub base_grid_size: usize,
    pub levels_per_growth: u32,
    pub growth_step: usize,
    pub min_coins: usize,
    pub max_coins: usize,
    pub coin_area_divisor: usize,
    pub coin_retry_factor: usize,
    pub level_advance_delay_ms: u64,
    pub best_times_per_level: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            base_grid_size: BASE_GRID_SIZE,
            levels_per_growth: LEVELS_PER_GROWTH,
            growth_step: GROWTH_STEP,
            min_coins: MIN_COINS,
            max_coins: MAX_COINS,
            coin_area_divisor: COIN_AREA_DIVISOR,
            coin_retry_factor: COIN_RETRY_FACTOR,
            level_advance_delay_ms: LEVEL_ADVANCE_DELAY_MS,
            best_times_per_level: BEST_TIMES_PER_LEVEL,
        }
    }
}

impl GameSettings {
    /// Grid dimensions `(rows, cols)` for the given level.
    ///
    /// The maze is square and grows by `growth_step` every `levels_per_growth` levels.
    pub fn grid_dimensions(&self, level: u32) -> (usize, usize) {
        let level = level.max(1);
        let growth = ((level - 1) / self.levels_per_growth.max(1)) as usize;
        let size = self.base_grid_size.max(1) + growth * self.growth_step;
        (size, size)
    }

    /// Target coin count for a level on a `rows x cols` grid.
    pub fn coin_target(&self, level: u32, rows: usize, cols: usize) -> usize {
        let base = self
            .min_coins
            .max((rows * cols) / self.coin_area_divisor.max(1));
        let extra = level.max(1) as usize - 1;
        (base + extra).min(self.max_coins)
    }

    /// Maximum number of random draws when placing coins.
    pub fn coin_retry_budget(&self, rows: usize, cols: usize) -> usize {
        rows * cols * self.coin_retry_factor
    }
}
