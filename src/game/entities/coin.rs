//! Coin entity logic.
//!
//! This module handles scattering coins across a freshly generated maze.

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use crate::config::game::GameSettings;
use crate::game::grid::Grid;
use crate::game::types::Position;

/// Randomly place coins on the grid for the given level.
///
/// Cells in `forbidden` (start and exit) never receive a coin. Sampling stops when the
/// target count is reached or the retry budget runs out, so tiny grids may end up with
/// fewer coins than targeted.
pub fn place_coins<R: Rng>(
    grid: &Grid,
    level: u32,
    forbidden: &[Position],
    settings: &GameSettings,
    rng: &mut R,
) -> HashSet<Position> {
    let mut coins = HashSet::new();
    if grid.is_empty() {
        return coins;
    }

    let target = settings.coin_target(level, grid.rows(), grid.cols());
    let budget = settings.coin_retry_budget(grid.rows(), grid.cols());

    let mut tries = 0;
    while coins.len() < target && tries < budget {
        let pos = grid.position(rng.random_range(0..grid.len()));
        if !forbidden.contains(&pos) {
            coins.insert(pos);
        }
        tries += 1;
    }

    if coins.len() < target {
        warn!(
            "[Coins] Placed only {}/{} coins on a {}x{} grid after {} draws",
            coins.len(),
            target,
            grid.rows(),
            grid.cols(),
            tries
        );
    } else {
        debug!("[Coins] Placed {} coins in {} draws", coins.len(), tries);
    }
    coins
}

/// Remove the coin at `pos`, if any. Returns true when a coin was picked up.
pub fn try_pickup_coin(coins: &mut HashSet<Position>, pos: Position) -> bool {
    coins.remove(&pos)
}
